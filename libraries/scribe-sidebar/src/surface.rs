//! Rendering and navigation boundary.
//!
//! The controller hands a [`SidebarView`] to a surface and asks it to
//! navigate or show notices; how that maps onto a host (a web page's DOM
//! container, a terminal) is the surface's business.

use crate::view::SidebarView;

/// Where the sidebar is drawn and how the page moves.
pub trait Surface {
    /// Replace the entire sidebar content with this view.
    ///
    /// Every render is a full overwrite; surfaces must not try to patch a
    /// previous render.
    fn replace(&mut self, view: &SidebarView);

    /// Navigate the host away to a path. No renderer action follows.
    fn navigate(&mut self, path: &str);

    /// Show a user-visible notice (e.g. "You must login first").
    fn notify(&mut self, message: &str);
}

/// Surface producing an HTML fragment for an embedding page.
///
/// Holds the markup of the latest render and records navigations and
/// notices, which also makes it the natural test double.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    html: Option<String>,
    location: Option<String>,
    notices: Vec<String>,
}

impl HtmlSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the latest render, if any render happened.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// Path of the latest navigation, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Notices shown so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl Surface for HtmlSurface {
    fn replace(&mut self, view: &SidebarView) {
        self.html = Some(view.to_html());
    }

    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Surface rendering the sidebar as plain text, for terminal hosts.
#[derive(Debug, Default)]
pub struct TextSurface {
    buffer: String,
    location: Option<String>,
}

impl TextSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Path of the latest navigation, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Surface for TextSurface {
    fn replace(&mut self, view: &SidebarView) {
        self.buffer.clear();
        self.buffer.push_str("== Menu ==\n");
        for item in &view.items {
            self.buffer
                .push_str(&format!("  {} -> {}\n", item.label, item.href));
        }
        self.buffer
            .push_str(&format!("signed in as {}\n[log out]\n", view.username));
    }

    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
        self.buffer.push_str(&format!("(navigating to {path})\n"));
    }

    fn notify(&mut self, message: &str) {
        self.buffer.push_str(&format!("! {message}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::types::{Identity, Role};

    #[test]
    fn html_surface_overwrites_on_each_render() {
        let mut surface = HtmlSurface::new();

        surface.replace(&SidebarView::for_identity(&Identity::new(
            "alice",
            Role::Admin,
        )));
        assert!(surface.html().unwrap().contains("alice"));

        surface.replace(&SidebarView::for_identity(&Identity::new(
            "bob",
            Role::User,
        )));
        let html = surface.html().unwrap();
        assert!(html.contains("bob"));
        assert!(!html.contains("alice"));
    }

    #[test]
    fn text_surface_lists_items_in_order() {
        let mut surface = TextSurface::new();
        surface.replace(&SidebarView::for_identity(&Identity::new(
            "carol",
            Role::Admin,
        )));

        let contents = surface.contents();
        let users_pos = contents.find("Users").unwrap();
        let posts_pos = contents.find("Posts").unwrap();
        assert!(users_pos < posts_pos);
        assert!(contents.contains("signed in as carol"));
    }
}
