/// Post domain type
use serde::{Deserialize, Serialize};

/// A blog post as returned by the posts endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Unique post identifier
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Id of the owning user
    pub user_id: i64,
}
