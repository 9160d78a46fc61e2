//! Error types for the sidebar renderer.

use thiserror::Error;

/// Errors that can occur while rendering the sidebar or managing the
/// session cache.
#[derive(Error, Debug)]
pub enum SidebarError {
    /// A network call through the panel client failed
    #[error("Client error: {0}")]
    Client(#[from] scribe_server_client::ClientError),

    /// Session cache file could not be read or written
    #[error("Session cache IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session cache file holds something other than a string map
    #[error("Session cache is corrupt: {0}")]
    CorruptCache(#[from] serde_json::Error),

    /// Logout requested while no menu is rendered
    #[error("Sidebar is not rendered")]
    NotRendered,
}

/// Result type for sidebar operations.
pub type Result<T> = std::result::Result<T, SidebarError>;
