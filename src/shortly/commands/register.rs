use crate::commands::{CmdMessage, CmdResult};
use crate::digest::hash_password;
use crate::error::{Result, ShortlyError};
use crate::model::User;
use crate::store::KeyValueStore;
use tracing::info;

use super::helpers::{load_users, save_users};

pub fn run<S: KeyValueStore>(store: &mut S, email: &str, password: &str) -> Result<CmdResult> {
    let mut users = load_users(store)?;
    if users.iter().any(|u| u.email == email) {
        return Err(ShortlyError::AlreadyRegistered(email.to_string()));
    }

    users.push(User::new(email, hash_password(password)));
    save_users(store, &users)?;
    info!(email, "registered user");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Registered successfully! You can now login.",
    ));
    Ok(result)
}
