use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShortlyError};
use crate::model::Session;
use crate::store::{KeyValueStore, TOKEN_KEY};
use crate::token;
use tracing::{debug, info, warn};

/// Restores the session saved by the last login.
///
/// The token is trusted as-is: the email is taken from it without re-checking the digest.
/// A token that cannot be decoded is discarded and the caller is logged out.
pub fn restore<S: KeyValueStore>(store: &mut S) -> Result<Option<Session>> {
    let Some(tok) = store.get(TOKEN_KEY)? else {
        debug!("no session token");
        return Ok(None);
    };

    match token::decode_email(&tok) {
        Some(email) if !email.is_empty() => Ok(Some(Session::new(email))),
        _ => {
            warn!("discarding undecodable session token");
            store.remove(TOKEN_KEY)?;
            Ok(None)
        }
    }
}

/// Like [`restore`], but a missing session is an error.
pub fn current<S: KeyValueStore>(store: &mut S) -> Result<Session> {
    restore(store)?.ok_or(ShortlyError::NotLoggedIn)
}

pub fn logout<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    store.remove(TOKEN_KEY)?;
    info!("logged out");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Logged out successfully."));
    Ok(result)
}
