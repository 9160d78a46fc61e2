//! Declarative sidebar view model.

use crate::menu::{menu_for, MenuItem};
use scribe_core::types::Identity;

/// Everything a surface needs to draw the sidebar.
///
/// The view model is derived once per render and handed to a
/// [`Surface`](crate::surface::Surface) wholesale; surfaces never patch a
/// previous render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    /// Username shown next to the logout control
    pub username: String,
    /// Menu entries in display order
    pub items: Vec<MenuItem>,
}

impl SidebarView {
    /// Derive the view for an identity.
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            items: menu_for(identity),
        }
    }

    /// Render the view as the HTML fragment an embedding page injects into
    /// the sidebar container.
    pub fn to_html(&self) -> String {
        let mut menu = String::from("<h3>Menu</h3>\n");
        for item in &self.items {
            menu.push_str(&format!(
                "<a href=\"{}\"><i class=\"{}\"></i> {}</a>\n",
                escape_html(&item.href),
                item.icon,
                escape_html(item.label),
            ));
        }

        format!(
            "<div class=\"menu-items\">\n{menu}</div>\n\
             <div class=\"logout-dropdown\">\n\
             <button id=\"logout-btn\"><i class=\"fas fa-sign-out-alt\"></i> Log out</button>\n\
             <div class=\"dropdown-content\" id=\"logout-menu\">\n\
             <p><i class=\"fas fa-user\"></i> {username}</p>\n\
             <a href=\"#\" id=\"confirm-logout\"><i class=\"fas fa-sign-out-alt\"></i> Log out</a>\n\
             </div>\n\
             </div>",
            username = escape_html(&self.username),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
