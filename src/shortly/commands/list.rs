use crate::commands::CmdResult;
use crate::error::{Result, ShortlyError};
use crate::model::{Session, ShortLink};
use crate::store::KeyValueStore;
use tracing::debug;

use super::helpers::load_links;

pub fn run<S: KeyValueStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let links = load_links(store, &session.email)?;
    debug!(email = %session.email, count = links.len(), "listed links");
    Ok(CmdResult::default().with_listed_links(links))
}

/// The link at 0-based `index` in the user's collection.
pub fn get<S: KeyValueStore>(store: &S, session: &Session, index: usize) -> Result<ShortLink> {
    let links = load_links(store, &session.email)?;
    let len = links.len();
    links
        .into_iter()
        .nth(index)
        .ok_or(ShortlyError::IndexOutOfRange { index, len })
}
