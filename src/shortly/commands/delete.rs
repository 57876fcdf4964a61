use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShortlyError};
use crate::model::Session;
use crate::store::{user_links_key, KeyValueStore, WriteBatch, URL_MAP_KEY};
use tracing::info;

use super::helpers::{load_links, load_url_map, to_json};

/// Removes the link at 0-based `index` and drops its code from the global index.
///
/// Both keys are committed in one batch.
pub fn run<S: KeyValueStore>(store: &mut S, session: &Session, index: usize) -> Result<CmdResult> {
    let mut links = load_links(store, &session.email)?;
    if index >= links.len() {
        return Err(ShortlyError::IndexOutOfRange {
            index,
            len: links.len(),
        });
    }

    let removed = links.remove(index);
    let mut batch = WriteBatch::new().set(user_links_key(&session.email), to_json(&links)?);

    let mut map = load_url_map(store)?;
    if map.remove(&removed.short).is_some() {
        batch = batch.set(URL_MAP_KEY, to_json(&map)?);
    }

    store.apply(batch)?;
    info!(email = %session.email, short = %removed.short, "deleted link");

    let mut result = CmdResult::default().with_affected_links(vec![removed]);
    result.add_message(CmdMessage::success("Link deleted"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::{load_links, load_url_map};
    use crate::commands::shorten;
    use crate::links::RandomCodes;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::KeyValueStore;

    fn fixture() -> InMemoryStore {
        StoreFixture::new()
            .with_links(
                "a@x.io",
                &[
                    ("https://one.io", "short.ly/111111"),
                    ("https://two.io", "short.ly/222222"),
                ],
            )
            .store
    }

    #[test]
    fn removes_link_and_index_entry() {
        let mut store = InMemoryStore::new();
        let session = Session::new("a@x.io");
        let created = shorten::run(&mut store, &session, "example.com", &mut RandomCodes, 8)
            .unwrap()
            .affected_links
            .remove(0);
        assert!(load_url_map(&store).unwrap().contains_key(&created.short));

        let result = run(&mut store, &session, 0).unwrap();
        assert_eq!(result.affected_links[0].short, created.short);
        assert!(!load_url_map(&store).unwrap().contains_key(&created.short));
        assert!(load_links(&store, "a@x.io").unwrap().is_empty());
    }

    #[test]
    fn removes_only_the_given_position() {
        let mut store = fixture();
        run(&mut store, &Session::new("a@x.io"), 0).unwrap();

        let links = load_links(&store, "a@x.io").unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].short, "short.ly/222222");
        let map = load_url_map(&store).unwrap();
        assert!(!map.contains_key("short.ly/111111"));
        assert!(map.contains_key("short.ly/222222"));
    }

    #[test]
    fn out_of_range_changes_nothing() {
        let mut store = fixture();
        let links_before = store.get("urls_a@x.io").unwrap();
        let map_before = store.get(URL_MAP_KEY).unwrap();

        let err = run(&mut store, &Session::new("a@x.io"), 2).unwrap_err();
        assert!(matches!(err, ShortlyError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(store.get("urls_a@x.io").unwrap(), links_before);
        assert_eq!(store.get(URL_MAP_KEY).unwrap(), map_before);
    }

    #[test]
    fn missing_index_entry_is_tolerated() {
        let mut store = fixture();
        store.set(URL_MAP_KEY, "{}").unwrap();

        run(&mut store, &Session::new("a@x.io"), 1).unwrap();
        assert_eq!(load_links(&store, "a@x.io").unwrap().len(), 1);
        assert_eq!(store.get(URL_MAP_KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn failed_write_changes_neither_structure() {
        let mut store = fixture();
        store.set_simulate_write_error(true);
        assert!(run(&mut store, &Session::new("a@x.io"), 0).is_err());
        store.set_simulate_write_error(false);

        assert_eq!(load_links(&store, "a@x.io").unwrap().len(), 2);
        assert_eq!(load_url_map(&store).unwrap().len(), 2);
    }
}
