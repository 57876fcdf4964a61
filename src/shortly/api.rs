//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every client (the CLI today)
//! goes through [`ShortlyApi`].
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (trims emails, rejects empty credentials)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no session of its own. Link operations take the caller's [`Session`]
//! explicitly; [`ShortlyApi::restore_session`] is how a client obtains one on startup.
//!
//! `ShortlyApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `ShortlyApi<FileStore>`
//! - Testing: `ShortlyApi<InMemoryStore>`

use crate::commands;
use crate::config::ShortlyConfig;
use crate::error::{Result, ShortlyError};
use crate::links::{CodeSource, RandomCodes};
use crate::model::{Session, ShortLink};
use crate::store::KeyValueStore;
use std::path::{Path, PathBuf};

/// The main API facade for shortly operations.
pub struct ShortlyApi<S: KeyValueStore> {
    store: S,
    config_dir: PathBuf,
    config: ShortlyConfig,
    codes: Box<dyn CodeSource>,
}

impl<S: KeyValueStore> ShortlyApi<S> {
    pub fn new(store: S, config_dir: PathBuf, config: ShortlyConfig) -> Self {
        Self {
            store,
            config_dir,
            config,
            codes: Box::new(RandomCodes),
        }
    }

    /// Replace the short-code generator.
    pub fn with_code_source(mut self, codes: impl CodeSource + 'static) -> Self {
        self.codes = Box::new(codes);
        self
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<commands::CmdResult> {
        let email = require_credentials(email, password)?;
        commands::register::run(&mut self.store, email, password)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<commands::CmdResult> {
        let email = require_credentials(email, password)?;
        commands::login::run(&mut self.store, email, password)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::session::logout(&mut self.store)
    }

    pub fn restore_session(&mut self) -> Result<Option<Session>> {
        commands::session::restore(&mut self.store)
    }

    pub fn current_session(&mut self) -> Result<Session> {
        commands::session::current(&mut self.store)
    }

    pub fn shorten(&mut self, session: &Session, raw: &str) -> Result<commands::CmdResult> {
        commands::shorten::run(
            &mut self.store,
            session,
            raw.trim(),
            self.codes.as_mut(),
            self.config.max_code_attempts,
        )
    }

    pub fn list_links(&self, session: &Session) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, session)
    }

    pub fn get_link(&self, session: &Session, index: usize) -> Result<ShortLink> {
        commands::list::get(&self.store, session, index)
    }

    pub fn delete_link(&mut self, session: &Session, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, session, index)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(updated) = &result.config {
            self.config = updated.clone();
        }
        Ok(result)
    }

    pub fn settings(&self) -> &ShortlyConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn require_credentials<'a>(email: &'a str, password: &str) -> Result<&'a str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ShortlyError::Api("Enter email & password".to_string()));
    }
    Ok(email)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShortlyApi<InMemoryStore> {
        ShortlyApi::new(
            InMemoryStore::new(),
            std::env::temp_dir().join("shortly-api-tests-unused"),
            ShortlyConfig::default(),
        )
    }

    #[test]
    fn register_then_login_restores_same_session() {
        let mut api = api();
        api.register("  me@x.io ", "pw").unwrap();
        let login = api.login("me@x.io", "pw").unwrap();
        assert_eq!(login.session, Some(Session::new("me@x.io")));
        assert_eq!(api.restore_session().unwrap(), Some(Session::new("me@x.io")));
    }

    #[test]
    fn empty_credentials_are_rejected_before_storage() {
        let mut api = api();
        assert!(matches!(api.register("", "pw"), Err(ShortlyError::Api(_))));
        assert!(matches!(api.register("   ", "pw"), Err(ShortlyError::Api(_))));
        assert!(matches!(api.login("me@x.io", ""), Err(ShortlyError::Api(_))));
        assert!(api.store().is_empty());
    }

    #[test]
    fn link_lifecycle_through_facade() {
        let mut api = api().with_code_source(|| "short.ly/fixed1".to_string());
        let session = Session::new("me@x.io");

        let created = api.shorten(&session, "  rust-lang.org  ").unwrap();
        assert_eq!(created.affected_links[0].long, "https://rust-lang.org");
        assert_eq!(created.affected_links[0].short, "short.ly/fixed1");

        assert_eq!(api.list_links(&session).unwrap().listed_links.len(), 1);
        assert_eq!(api.get_link(&session, 0).unwrap().short, "short.ly/fixed1");

        api.delete_link(&session, 0).unwrap();
        assert!(api.list_links(&session).unwrap().listed_links.is_empty());
    }

    #[test]
    fn logout_clears_session() {
        let mut api = api();
        api.register("me@x.io", "pw").unwrap();
        api.login("me@x.io", "pw").unwrap();
        api.logout().unwrap();
        assert!(matches!(api.current_session(), Err(ShortlyError::NotLoggedIn)));
    }
}
