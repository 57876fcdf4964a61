//! # Storage Layer
//!
//! Everything shortly persists lives in a flat string-to-string key-value store, the same
//! shape as a browser's `localStorage`. The [`KeyValueStore`] trait is that store; the
//! command layer serializes its collections to JSON strings on top of it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON object in `storage.json`
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Key Layout
//!
//! ```text
//! users           JSON array of {email, password}
//! urls_<email>    JSON array of {long, short[, created_at]} for one user
//! url_map         JSON object short code -> long URL
//! token           base64("<email>:<digest>")
//! ```
//!
//! ## Batches
//!
//! Operations that touch more than one key (shortening and deleting a link change both the
//! user's collection and `url_map`) go through [`KeyValueStore::apply`]. Backends commit a
//! batch all-or-nothing.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub const USERS_KEY: &str = "users";
pub const URL_MAP_KEY: &str = "url_map";
pub const TOKEN_KEY: &str = "token";

/// Key of the link collection owned by `email`. The email is used verbatim.
pub fn user_links_key(email: &str) -> String {
    format!("urls_{}", email)
}

/// A single pending change: `Some` sets the key, `None` removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub key: String,
    pub value: Option<String>,
}

/// An ordered set of writes committed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    writes: Vec<Write>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.writes.push(Write {
            key: key.into(),
            value: Some(value.into()),
        });
        self
    }

    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.writes.push(Write {
            key: key.into(),
            value: None,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<Write> {
        self.writes
    }
}

/// Abstract interface for persistent string storage.
pub trait KeyValueStore {
    /// Get the value at `key`, or `None` if unset
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Commit every write in `batch`, or none of them.
    fn apply(&mut self, batch: WriteBatch) -> Result<()>;
}
