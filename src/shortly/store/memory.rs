use super::{KeyValueStore, WriteBatch};
use crate::error::{Result, ShortlyError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail without touching stored data.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShortlyError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<()> {
        self.check_writable()?;
        for write in batch.into_writes() {
            match write.value {
                Some(value) => {
                    self.entries.insert(write.key, value);
                }
                None => {
                    self.entries.remove(&write.key);
                }
            }
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::digest::hash_password;
    use crate::model::ShortLink;
    use crate::store::{user_links_key, TOKEN_KEY, URL_MAP_KEY, USERS_KEY};
    use serde_json::{json, Map, Value};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push_user(mut self, email: &str, stored_password: String) -> Self {
            let mut users: Vec<Value> = self
                .store
                .get(USERS_KEY)
                .unwrap()
                .map(|raw| serde_json::from_str(&raw).unwrap())
                .unwrap_or_default();
            users.push(json!({ "email": email, "password": stored_password }));
            self.store
                .set(USERS_KEY, &serde_json::to_string(&users).unwrap())
                .unwrap();
            self
        }

        /// A user registered through the current code path (digest stored).
        pub fn with_user(self, email: &str, password: &str) -> Self {
            self.push_user(email, hash_password(password))
        }

        /// A user written by an old client that stored the password in the clear.
        pub fn with_legacy_user(self, email: &str, password: &str) -> Self {
            self.push_user(email, password.to_string())
        }

        /// Links for `email`, also registered in the global short-code index.
        pub fn with_links(mut self, email: &str, links: &[(&str, &str)]) -> Self {
            let key = user_links_key(email);
            let mut stored: Vec<ShortLink> = self
                .store
                .get(&key)
                .unwrap()
                .map(|raw| serde_json::from_str(&raw).unwrap())
                .unwrap_or_default();
            let mut map: Map<String, Value> = self
                .store
                .get(URL_MAP_KEY)
                .unwrap()
                .map(|raw| serde_json::from_str(&raw).unwrap())
                .unwrap_or_default();
            for (long, short) in links {
                stored.push(ShortLink::new(*long, *short));
                map.insert(short.to_string(), Value::String(long.to_string()));
            }
            self.store
                .set(&key, &serde_json::to_string(&stored).unwrap())
                .unwrap();
            self.store
                .set(URL_MAP_KEY, &serde_json::to_string(&map).unwrap())
                .unwrap();
            self
        }

        pub fn with_token(mut self, token: &str) -> Self {
            self.store.set(TOKEN_KEY, token).unwrap();
            self
        }
    }
}
