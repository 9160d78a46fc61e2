//! Authentication endpoints: login, current-user lookup, logout.

use crate::client::PanelClient;
use crate::error::{ClientError, Result};
use crate::types::{CredentialStrategy, LoginRequest, LoginResponse};
use reqwest::Method;
use scribe_core::types::Identity;
use tracing::{debug, info, warn};

impl PanelClient {
    /// Login with username and password.
    ///
    /// On success the issued token replaces the current credential strategy,
    /// so subsequent calls authenticate as this user.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        debug!(username = %username, "attempting login");

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let builder = self.request(Method::POST, "/login").await?.json(&request);

        // A 401 here means rejected credentials, not an expired session.
        let response = match self.execute(builder).await {
            Ok(response) => response,
            Err(ClientError::Unauthenticated) => {
                warn!(username = %username, "login rejected");
                return Err(ClientError::LoginFailed(
                    "invalid username or password".to_string(),
                ));
            }
            Err(e) => return Err(e),
        };

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        info!(username = %login.username, role = %login.role, "login successful");

        self.set_credentials(CredentialStrategy::BearerToken(login.access_token.clone()))
            .await;

        Ok(login)
    }

    /// Get the identity of the current session via `/me`.
    pub async fn current_user(&self) -> Result<Identity> {
        let identity: Identity = self.get_json("/me").await?;
        debug!(username = %identity.username, role = %identity.role, "resolved current user");
        Ok(identity)
    }

    /// End the server-side session via `POST /logout`.
    ///
    /// On success a bearer token is discarded; the server has already
    /// invalidated it. Local cache keys are the caller's to clear.
    pub async fn logout(&self) -> Result<()> {
        let builder = self.request(Method::POST, "/logout").await?;
        self.execute(builder).await?;

        if matches!(
            self.credentials().await,
            CredentialStrategy::BearerToken(_)
        ) {
            self.set_credentials(CredentialStrategy::None).await;
        }

        info!("logged out");
        Ok(())
    }
}
