//! Request/response types and client configuration.

use scribe_core::types::Role;
use serde::{Deserialize, Serialize};

/// How a request proves session validity.
///
/// The fetch routine is identical regardless of the transport; the strategy
/// is applied once at request-build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CredentialStrategy {
    /// Send nothing; only works against open endpoints
    #[default]
    None,
    /// Rely on the session cookie the client's cookie store carries
    AmbientCookie,
    /// Attach `Authorization: Bearer <token>`
    BearerToken(String),
    /// Attach arbitrary (name, value) header pairs
    CustomHeaders(Vec<(String, String)>),
}

/// Configuration for connecting to a Scribe backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g. "http://localhost:8000")
    pub base_url: String,
    /// Credential strategy applied to every request
    pub credentials: CredentialStrategy,
}

impl ClientConfig {
    /// Create a config with no credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: CredentialStrategy::None,
        }
    }

    /// Create a config with an explicit credential strategy.
    pub fn with_credentials(
        base_url: impl Into<String>,
        credentials: CredentialStrategy,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }
}

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Token for the bearer credential strategy
    pub access_token: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}
