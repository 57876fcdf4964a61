use crate::error::{Result, ShortlyError};
use crate::model::{ShortLink, User};
use crate::store::{user_links_key, KeyValueStore, URL_MAP_KEY, USERS_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Global index from short code to long URL.
pub type UrlMap = BTreeMap<String, String>;

fn load_json<S: KeyValueStore, T: DeserializeOwned + Default>(store: &S, key: &str) -> Result<T> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(ShortlyError::Serialization),
        None => Ok(T::default()),
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(ShortlyError::Serialization)
}

pub fn load_users<S: KeyValueStore>(store: &S) -> Result<Vec<User>> {
    load_json(store, USERS_KEY)
}

pub fn save_users<S: KeyValueStore>(store: &mut S, users: &[User]) -> Result<()> {
    store.set(USERS_KEY, &to_json(users)?)
}

pub fn load_links<S: KeyValueStore>(store: &S, email: &str) -> Result<Vec<ShortLink>> {
    load_json(store, &user_links_key(email))
}

pub fn load_url_map<S: KeyValueStore>(store: &S) -> Result<UrlMap> {
    load_json(store, URL_MAP_KEY)
}
