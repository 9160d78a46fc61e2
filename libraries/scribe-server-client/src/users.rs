//! Users endpoints.

use crate::client::PanelClient;
use crate::error::Result;
use scribe_core::types::{UserDirectory, UserRecord};
use tracing::debug;

impl PanelClient {
    /// Fetch the raw user list from `GET /users/`.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let users: Vec<UserRecord> = self.get_json("/users/").await?;
        debug!(count = users.len(), "fetched user list");
        Ok(users)
    }

    /// Fetch the user list and collapse it into an id-to-username directory.
    ///
    /// The returned directory is built from this fetch alone; it replaces
    /// whatever the caller held before, it is never merged into it.
    pub async fn fetch_user_directory(&self) -> Result<UserDirectory> {
        let users = self.list_users().await?;
        Ok(UserDirectory::from_records(users))
    }

    /// Fetch a single user by id from `GET /users/{id}`.
    pub async fn get_user(&self, id: i64) -> Result<UserRecord> {
        self.get_json(&format!("/users/{id}")).await
    }
}
