//! Domain types for the Scribe panel client

mod identity;
mod post;
mod user;

pub use identity::{Identity, Role};
pub use post::PostRecord;
pub use user::{UserDirectory, UserRecord};
