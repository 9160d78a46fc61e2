//! Scribe Panel Core
//!
//! Platform-agnostic domain types shared by the panel client libraries.
//!
//! This crate defines:
//! - **Identity**: the (username, role) tuple describing the current session
//! - **Users**: `UserRecord` and the `UserDirectory` id-to-username lookup
//! - **Posts**: `PostRecord` as served by the posts endpoint
//!
//! # Example
//!
//! ```rust
//! use scribe_core::types::{Identity, Role, UserDirectory, UserRecord};
//!
//! let identity = Identity::new("alice", Role::Admin);
//! assert!(identity.role.is_admin());
//!
//! let directory = UserDirectory::from_records(vec![
//!     UserRecord { id: 1, username: "alice".into() },
//! ]);
//! assert_eq!(directory.username(1), Some("alice"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{Identity, PostRecord, Role, UserDirectory, UserRecord};
