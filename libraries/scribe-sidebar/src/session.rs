//! Local session cache.
//!
//! The browser-side original keeps `username`, `role`, and `access_token` in
//! localStorage; this is the same key-value contract behind a trait, with an
//! in-memory store and a JSON-file-backed one.

use crate::error::Result;
use scribe_core::types::{Identity, Role};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Cache key for the username.
pub const KEY_USERNAME: &str = "username";
/// Cache key for the role string.
pub const KEY_ROLE: &str = "role";
/// Cache key for the bearer token.
pub const KEY_ACCESS_TOKEN: &str = "access_token";

const IDENTITY_KEYS: [&str; 3] = [KEY_USERNAME, KEY_ROLE, KEY_ACCESS_TOKEN];

/// Key-value store holding the locally cached session.
pub trait SessionStore {
    /// Read a key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Remove username, role, and token together.
    ///
    /// Implementations persist once for all three keys, so a logout never
    /// leaves a half-cleared cache behind.
    fn clear_identity(&mut self) -> Result<()>;
}

/// Build the client-trusted identity from the cache.
///
/// Absent keys fall back to the placeholder ("User" with the user role);
/// this path performs no server validation.
pub fn cached_identity<K: SessionStore + ?Sized>(store: &K) -> Identity {
    let username = store
        .get(KEY_USERNAME)
        .unwrap_or_else(|| Identity::placeholder().username);
    let role = store.get(KEY_ROLE).map(Role::from).unwrap_or_default();
    Identity::new(username, role)
}

/// Store an identity (and optionally a token) after login.
pub fn store_identity<K: SessionStore + ?Sized>(
    store: &mut K,
    identity: &Identity,
    access_token: Option<&str>,
) -> Result<()> {
    store.set(KEY_USERNAME, &identity.username)?;
    store.set(KEY_ROLE, identity.role.as_str())?;
    if let Some(token) = access_token {
        store.set(KEY_ACCESS_TOKEN, token)?;
    }
    Ok(())
}

/// Volatile in-memory store, mainly for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear_identity(&mut self) -> Result<()> {
        for key in IDENTITY_KEYS {
            self.entries.remove(key);
        }
        Ok(())
    }
}

/// Store persisted as a JSON object of string values, one file per profile.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Open the store at `path`, reading existing entries if the file is
    /// there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Where the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.save()
    }

    fn clear_identity(&mut self) -> Result<()> {
        for key in IDENTITY_KEYS {
            self.entries.remove(key);
        }
        // One write for all three keys.
        self.save()
    }
}
