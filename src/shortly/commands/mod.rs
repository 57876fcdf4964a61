use crate::config::ShortlyConfig;
use crate::model::{Session, ShortLink};

pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod login;
pub mod register;
pub mod session;
pub mod shorten;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub session: Option<Session>,
    pub affected_links: Vec<ShortLink>,
    pub listed_links: Vec<ShortLink>,
    pub config: Option<ShortlyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_affected_links(mut self, links: Vec<ShortLink>) -> Self {
        self.affected_links = links;
        self
    }

    pub fn with_listed_links(mut self, links: Vec<ShortLink>) -> Self {
        self.listed_links = links;
        self
    }

    pub fn with_config(mut self, config: ShortlyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
