/// User domain types
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user as returned by the users-list endpoint.
///
/// The endpoint serves more columns than the panel needs; unknown fields are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: i64,
    /// Display name
    pub username: String,
}

/// Lookup from user id to username, rebuilt wholesale on every fetch.
///
/// A directory is only ever produced by [`UserDirectory::from_records`];
/// there is no merge or patch API, so entries from a previous fetch cannot
/// survive a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    entries: BTreeMap<i64, String>,
}

impl UserDirectory {
    /// Build a directory from a freshly fetched list of records.
    ///
    /// Later records win when the server hands back duplicate ids.
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| (record.id, record.username))
            .collect();
        Self { entries }
    }

    /// Look up the username for an id.
    pub fn username(&self, id: i64) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory holds no users.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (id, username) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
