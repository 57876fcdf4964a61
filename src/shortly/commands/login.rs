use crate::commands::{CmdMessage, CmdResult};
use crate::digest::hash_password;
use crate::error::{Result, ShortlyError};
use crate::model::{Session, StoredPassword};
use crate::store::{KeyValueStore, TOKEN_KEY};
use crate::token;
use tracing::{debug, info};

use super::helpers::{load_users, save_users};

/// Checks `password` against the stored credentials for `email`.
///
/// A user whose password is still stored in the clear is upgraded to a digest on the first
/// successful check. No other writes happen here.
pub fn verify<S: KeyValueStore>(store: &mut S, email: &str, password: &str) -> Result<Session> {
    let mut users = load_users(store)?;
    let pos = users
        .iter()
        .position(|u| u.email == email)
        .ok_or_else(|| ShortlyError::NotFound(email.to_string()))?;

    let computed = hash_password(password);
    let needs_migration = match &users[pos].password {
        StoredPassword::Digest(stored) => {
            if *stored != computed {
                debug!(email, "digest mismatch");
                return Err(ShortlyError::InvalidCredentials);
            }
            false
        }
        StoredPassword::Plaintext(stored) => {
            if stored != password {
                debug!(email, "legacy password mismatch");
                return Err(ShortlyError::InvalidCredentials);
            }
            true
        }
    };

    if needs_migration {
        users[pos].password = StoredPassword::Digest(computed);
        save_users(store, &users)?;
        info!(email, "migrated legacy password to digest");
    }

    Ok(Session::new(email))
}

/// Verifies credentials and persists a session token.
pub fn run<S: KeyValueStore>(store: &mut S, email: &str, password: &str) -> Result<CmdResult> {
    let session = verify(store, email, password)?;
    store.set(TOKEN_KEY, &token::encode(email, &hash_password(password)))?;
    info!(email, "logged in");

    let mut result = CmdResult::default().with_session(session);
    result.add_message(CmdMessage::success("Login successful!"));
    Ok(result)
}
