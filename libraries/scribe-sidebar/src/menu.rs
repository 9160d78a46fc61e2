//! Role-to-menu derivation.
//!
//! A pure mapping from the current identity to a fixed, ordered list of
//! menu-item descriptors. No permission computation happens here; the role
//! picks one of two static link sets.

use scribe_core::types::Identity;
use url::form_urlencoded;

/// One entry in the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Link text
    pub label: &'static str,
    /// Link target; static path, optionally carrying a query string
    pub href: String,
    /// Icon class for HTML surfaces
    pub icon: &'static str,
}

impl MenuItem {
    fn new(label: &'static str, href: impl Into<String>, icon: &'static str) -> Self {
        Self {
            label,
            href: href.into(),
            icon,
        }
    }
}

/// Derive the menu for an identity.
///
/// Admins get the user management and all-posts views; everyone else gets
/// post creation and their own posts, keyed by username in the query string.
pub fn menu_for(identity: &Identity) -> Vec<MenuItem> {
    if identity.role.is_admin() {
        vec![
            MenuItem::new("Users", "/static/users.html", "fas fa-users"),
            MenuItem::new("Posts", "/static/user_posts.html", "fas fa-file-alt"),
        ]
    } else {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &identity.username)
            .finish();
        vec![
            MenuItem::new("New Post", "/static/create_post.html", "fas fa-plus"),
            MenuItem::new(
                "Posts",
                format!("/static/user_posts.html?{query}"),
                "fas fa-file-alt",
            ),
        ]
    }
}
