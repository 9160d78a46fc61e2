//! Posts endpoints.

use crate::client::PanelClient;
use crate::error::Result;
use scribe_core::types::PostRecord;
use tracing::debug;

impl PanelClient {
    /// Fetch all posts from `GET /posts/`.
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>> {
        let posts: Vec<PostRecord> = self.get_json("/posts/").await?;
        debug!(count = posts.len(), "fetched post list");
        Ok(posts)
    }

    /// Fetch a single post by id from `GET /posts/{id}`.
    pub async fn get_post(&self, id: i64) -> Result<PostRecord> {
        self.get_json(&format!("/posts/{id}")).await
    }
}
