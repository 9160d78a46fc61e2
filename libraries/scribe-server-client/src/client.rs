//! Main panel client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, CredentialStrategy};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Session-aware client for the Scribe backend.
///
/// The client issues one request per call, applies the configured credential
/// strategy uniformly, and classifies responses: 401 becomes
/// [`ClientError::Unauthenticated`], other non-success statuses become
/// [`ClientError::Http`], and bodies that fail to parse become
/// [`ClientError::MalformedResponse`]. It never mutates shared state beyond
/// its own credentials; callers decide what to do with results.
///
/// # Example
///
/// ```ignore
/// use scribe_server_client::{ClientConfig, CredentialStrategy, PanelClient};
///
/// let config = ClientConfig::with_credentials(
///     "http://localhost:8000",
///     CredentialStrategy::AmbientCookie,
/// );
/// let client = PanelClient::new(config)?;
///
/// let directory = client.fetch_user_directory().await?;
/// println!("{} users", directory.len());
/// ```
pub struct PanelClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl PanelClient {
    /// Create a new client with the given configuration.
    ///
    /// Validates and normalizes the base URL and builds the underlying HTTP
    /// client with a cookie store (for the ambient-cookie strategy) and
    /// conservative timeouts.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized = ClientConfig {
            base_url,
            credentials: config.credentials,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .cookie_store(true)
            .user_agent(format!("ScribePanel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized)),
        })
    }

    /// Get the server base URL.
    pub async fn base_url(&self) -> String {
        self.config.read().await.base_url.clone()
    }

    /// Get the current credential strategy.
    pub async fn credentials(&self) -> CredentialStrategy {
        self.config.read().await.credentials.clone()
    }

    /// Replace the credential strategy (e.g. after login issues a token).
    pub async fn set_credentials(&self, credentials: CredentialStrategy) {
        self.config.write().await.credentials = credentials;
    }

    /// Build a request against a server path with credentials applied.
    pub(crate) async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let config = self.config.read().await;
        let url = format!("{}{}", config.base_url, path);
        debug!(method = %method, url = %url, "building request");
        apply_credentials(self.http.request(method, &url), &config.credentials)
    }

    /// Send a request and classify the response status.
    ///
    /// Returns the response only on 2xx; everything else maps into the
    /// error taxonomy.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Transport(e)
            }
        })?;

        let status = response.status();

        if status.as_u16() == 401 {
            warn!("request rejected: session missing or expired");
            return Err(ClientError::Unauthenticated);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// GET a path and parse the body as JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path).await?;
        let response = self.execute(builder).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

fn apply_credentials(
    builder: RequestBuilder,
    credentials: &CredentialStrategy,
) -> Result<RequestBuilder> {
    match credentials {
        // The cookie store rides along on its own.
        CredentialStrategy::None | CredentialStrategy::AmbientCookie => Ok(builder),
        CredentialStrategy::BearerToken(token) => Ok(builder.bearer_auth(token)),
        CredentialStrategy::CustomHeaders(pairs) => {
            let mut headers = HeaderMap::new();
            for (name, value) in pairs {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
                headers.insert(name, value);
            }
            Ok(builder.headers(headers))
        }
    }
}
