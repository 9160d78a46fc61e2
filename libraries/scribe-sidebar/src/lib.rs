//! Scribe Sidebar
//!
//! Role-aware sidebar for the Scribe panel: identity resolution (cached or
//! server-verified), pure role-to-menu derivation, a declarative view model
//! consumed by a rendering surface, a local session cache, and the
//! page-load/logout controller.
//!
//! # Example
//!
//! ```ignore
//! use scribe_sidebar::{
//!     HtmlSurface, IdentitySource, MemorySessionStore, SidebarController,
//! };
//! use scribe_server_client::{ClientConfig, PanelClient};
//! use std::sync::Arc;
//!
//! let client = Arc::new(PanelClient::new(ClientConfig::new("http://localhost:8000"))?);
//! let mut sidebar = SidebarController::new(
//!     client,
//!     HtmlSurface::new(),
//!     MemorySessionStore::new(),
//! );
//!
//! sidebar.load(IdentitySource::Verified).await?;
//! if let Some(html) = sidebar.surface().html() {
//!     println!("{html}");
//! }
//! ```

#![warn(missing_docs)]

mod controller;
mod error;
mod menu;
mod session;
mod surface;
mod view;

// Re-export main types
pub use controller::{
    load_user_directory, IdentitySource, SidebarController, SidebarState, ENTRY_PAGE, LOGIN_PAGE,
};
pub use error::{Result, SidebarError};
pub use menu::{menu_for, MenuItem};
pub use session::{
    cached_identity, store_identity, FileSessionStore, MemorySessionStore, SessionStore,
    KEY_ACCESS_TOKEN, KEY_ROLE, KEY_USERNAME,
};
pub use surface::{HtmlSurface, Surface, TextSurface};
pub use view::SidebarView;
