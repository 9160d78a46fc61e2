//! Scribe Server Client
//!
//! Session-aware HTTP client for the Scribe backend API.
//!
//! # Features
//!
//! - **Credential strategies**: ambient cookie, bearer token, custom headers
//! - **Response classification**: 401 vs other HTTP errors vs malformed
//!   bodies vs unreachable server
//! - **Typed endpoints**: users list (collapsed into an id-to-username
//!   directory), current user, posts, login/logout
//!
//! # Example
//!
//! ```ignore
//! use scribe_server_client::{ClientConfig, CredentialStrategy, PanelClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://localhost:8000");
//!     let client = PanelClient::new(config)?;
//!
//!     let login = client.login("alice", "secret").await?;
//!     println!("logged in as {}", login.username);
//!
//!     let directory = client.fetch_user_directory().await?;
//!     println!("{} users known", directory.len());
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod posts;
mod types;
mod users;

// Re-export main types
pub use client::PanelClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, CredentialStrategy, LoginRequest, LoginResponse};
