//! Page-load and logout control flow.
//!
//! One controller instance drives one page load:
//! `Init -> ResolvingIdentity -> { Rendered | RedirectedUnauthenticated }`,
//! and from `Rendered` only, `LoggingOut -> RedirectedLoggedOut`. After a
//! redirect no further renderer action occurs.

use crate::error::{Result, SidebarError};
use crate::session::{cached_identity, SessionStore};
use crate::surface::Surface;
use crate::view::SidebarView;
use scribe_core::types::UserDirectory;
use scribe_server_client::{ClientError, PanelClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry page shown after a successful logout.
pub const ENTRY_PAGE: &str = "/static/index.html";
/// Login entry point used when the session turns out to be invalid.
pub const LOGIN_PAGE: &str = "/";

/// Where the renderer gets its identity from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// Trust the local session cache; absent keys fall back to the
    /// placeholder identity. No server validation.
    Cached,
    /// Ask the server via `/me`; any failure redirects to the login page
    /// without rendering.
    Verified,
}

/// Renderer lifecycle states for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    /// Nothing has happened yet
    Init,
    /// Identity resolution in flight
    ResolvingIdentity,
    /// Menu is on the surface; logout is reachable from here only
    Rendered,
    /// Identity check failed, host was sent to the login page
    RedirectedUnauthenticated,
    /// Logout request in flight
    LoggingOut,
    /// Logout succeeded, host was sent to the entry page
    RedirectedLoggedOut,
}

/// Drives one sidebar through its page-load lifecycle.
pub struct SidebarController<S: Surface, K: SessionStore> {
    client: Arc<PanelClient>,
    surface: S,
    store: K,
    state: SidebarState,
}

impl<S: Surface, K: SessionStore> SidebarController<S, K> {
    /// Create a controller in the `Init` state.
    pub fn new(client: Arc<PanelClient>, surface: S, store: K) -> Self {
        Self {
            client,
            surface,
            store,
            state: SidebarState::Init,
        }
    }

    /// Resolve the identity and render the menu, once per page load.
    ///
    /// With [`IdentitySource::Verified`], any failure of the `/me` call
    /// redirects to the login page and ends the load; the error is not
    /// propagated because the redirect already handled it.
    pub async fn load(&mut self, source: IdentitySource) -> Result<()> {
        self.state = SidebarState::ResolvingIdentity;

        let identity = match source {
            IdentitySource::Cached => cached_identity(&self.store),
            IdentitySource::Verified => match self.client.current_user().await {
                Ok(identity) => identity,
                Err(e) => {
                    warn!(error = %e, "identity check failed, redirecting to login");
                    self.surface.navigate(LOGIN_PAGE);
                    self.state = SidebarState::RedirectedUnauthenticated;
                    return Ok(());
                }
            },
        };

        debug!(username = %identity.username, role = %identity.role, "rendering sidebar");
        let view = SidebarView::for_identity(&identity);
        self.surface.replace(&view);
        self.state = SidebarState::Rendered;
        Ok(())
    }

    /// End the session: `POST /logout`, clear the cache, leave the page.
    ///
    /// On success all identity keys are cleared before navigating to the
    /// entry page. On failure nothing is cleared and the rendered menu stays
    /// in place; there is no retry.
    pub async fn logout(&mut self) -> Result<()> {
        if self.state != SidebarState::Rendered {
            return Err(SidebarError::NotRendered);
        }

        self.state = SidebarState::LoggingOut;

        match self.client.logout().await {
            Ok(()) => {
                self.store.clear_identity()?;
                info!("session ended, leaving page");
                self.surface.navigate(ENTRY_PAGE);
                self.state = SidebarState::RedirectedLoggedOut;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "logout failed, staying on page");
                self.state = SidebarState::Rendered;
                Ok(())
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SidebarState {
        self.state
    }

    /// The surface being drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The session cache backing this controller.
    pub fn store(&self) -> &K {
        &self.store
    }
}

/// Page-load users fetch with the degrade-to-empty policy.
///
/// A missing session notifies the user and redirects to the login page; any
/// other failure is logged. Both cases hand back an empty directory so the
/// page keeps working with no entries instead of crashing.
pub async fn load_user_directory<S: Surface>(
    client: &PanelClient,
    surface: &mut S,
) -> UserDirectory {
    match client.fetch_user_directory().await {
        Ok(directory) => directory,
        Err(ClientError::Unauthenticated) => {
            surface.notify("You must login first");
            surface.navigate(LOGIN_PAGE);
            UserDirectory::default()
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch users");
            UserDirectory::default()
        }
    }
}
