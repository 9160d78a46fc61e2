/// Identity domain types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role in the system.
///
/// Anything the server reports that is not `admin` is treated as a regular
/// user; the menu only distinguishes those two cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    /// Administrator: sees the user management and all-posts views
    Admin,
    /// Regular user: sees post creation and own-posts views
    #[default]
    User,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl Role {
    /// Whether this role grants the admin menu.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Stable string form, matching the wire/cache representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "admin" => Role::Admin,
            _ => Role::User,
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (username, role) tuple describing the current session's subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name of the session's user
    pub username: String,
    /// Role the menu is derived from
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    /// Create an identity from parts.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// The placeholder identity used when the local cache holds nothing.
    ///
    /// This is the client-trusted default; a verified identity always comes
    /// from the server instead.
    pub fn placeholder() -> Self {
        Self::new("User", Role::User)
    }
}
