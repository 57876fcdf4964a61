use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShortlyError};
use crate::links::{normalize, CodeSource};
use crate::model::{Session, ShortLink};
use crate::store::{user_links_key, KeyValueStore, WriteBatch, URL_MAP_KEY};
use tracing::{info, warn};

use super::helpers::{load_links, load_url_map, to_json, UrlMap};

/// Draws codes until one is not already in `map`, giving up after `max_attempts`.
fn allocate_code<C: CodeSource + ?Sized>(
    map: &UrlMap,
    codes: &mut C,
    max_attempts: u32,
) -> Result<String> {
    for attempt in 1..=max_attempts {
        let candidate = codes.next_code();
        if !map.contains_key(&candidate) {
            return Ok(candidate);
        }
        warn!(attempt, code = %candidate, "short code collision");
    }
    Err(ShortlyError::CodeSpaceExhausted {
        attempts: max_attempts,
    })
}

pub fn run<S: KeyValueStore, C: CodeSource + ?Sized>(
    store: &mut S,
    session: &Session,
    raw: &str,
    codes: &mut C,
    max_attempts: u32,
) -> Result<CmdResult> {
    let long = normalize(raw).ok_or_else(|| ShortlyError::InvalidUrl(raw.to_string()))?;

    let mut links = load_links(store, &session.email)?;
    if links.iter().any(|l| l.long == long) {
        return Err(ShortlyError::DuplicateUrl(long));
    }

    let mut map = load_url_map(store)?;
    let short = allocate_code(&map, codes, max_attempts)?;

    let link = ShortLink::new(long.clone(), short.clone());
    links.push(link.clone());
    map.insert(short.clone(), long.clone());

    store.apply(
        WriteBatch::new()
            .set(user_links_key(&session.email), to_json(&links)?)
            .set(URL_MAP_KEY, to_json(&map)?),
    )?;
    info!(email = %session.email, %short, %long, "shortened url");

    let mut result = CmdResult::default().with_affected_links(vec![link]);
    result.add_message(CmdMessage::success("URL shortened"));
    Ok(result)
}
