use crate::digest::looks_like_digest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored password: either a legacy plaintext value or a hex digest.
///
/// Persisted as a bare string. Which variant a stored string becomes is decided by its shape,
/// so records written before hashing was introduced load as `Plaintext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoredPassword {
    Plaintext(String),
    Digest(String),
}

impl StoredPassword {
    pub fn as_str(&self) -> &str {
        match self {
            StoredPassword::Plaintext(s) | StoredPassword::Digest(s) => s,
        }
    }

    pub fn is_digest(&self) -> bool {
        matches!(self, StoredPassword::Digest(_))
    }
}

impl From<String> for StoredPassword {
    fn from(s: String) -> Self {
        if looks_like_digest(&s) {
            StoredPassword::Digest(s)
        } else {
            StoredPassword::Plaintext(s)
        }
    }
}

impl From<StoredPassword> for String {
    fn from(p: StoredPassword) -> Self {
        match p {
            StoredPassword::Plaintext(s) | StoredPassword::Digest(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: StoredPassword,
}

impl User {
    pub fn new(email: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: StoredPassword::Digest(digest.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub long: String,
    pub short: String,
    // Records created by older clients carry only `long` and `short`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    pub fn new(long: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            short: short.into(),
            created_at: Some(Utc::now()),
        }
    }
}

/// The logged-in user. Handed to every link operation explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
