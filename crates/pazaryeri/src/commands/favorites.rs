use super::{require_ids, warn_if_unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::store::StorageBackend;

fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}

fn finish<B: StorageBackend>(store: &FavoritesStore<B>, mut result: CmdResult) -> CmdResult {
    result.favorite_count = Some(store.favorite_count());
    warn_if_unsaved(store.persist_status(), &mut result);
    result
}

pub fn add<B: StorageBackend, I: AsRef<str>>(
    store: &mut FavoritesStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    require_ids(ids)?;
    let mut result = CmdResult::default();

    for id in ids {
        let id: &str = id.as_ref();
        if is_blank(id) {
            result.add_message(CmdMessage::warning("Ignored blank product id"));
        } else if store.add_favorite(id) {
            result.add_message(CmdMessage::success(format!("Added {} to favorites", id)));
            result.favorite_ids.push(id.to_string());
        } else {
            result.add_message(CmdMessage::info(format!("{} is already a favorite", id)));
        }
    }

    Ok(finish(store, result))
}

pub fn remove<B: StorageBackend, I: AsRef<str>>(
    store: &mut FavoritesStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    require_ids(ids)?;
    let mut result = CmdResult::default();

    for id in ids {
        let id: &str = id.as_ref();
        if is_blank(id) {
            result.add_message(CmdMessage::warning("Ignored blank product id"));
        } else if store.remove_favorite(id) {
            result.add_message(CmdMessage::success(format!(
                "Removed {} from favorites",
                id
            )));
        } else {
            result.add_message(CmdMessage::info(format!("{} was not a favorite", id)));
        }
    }

    Ok(finish(store, result))
}

pub fn toggle<B: StorageBackend, I: AsRef<str>>(
    store: &mut FavoritesStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    require_ids(ids)?;
    let mut result = CmdResult::default();

    for id in ids {
        let id: &str = id.as_ref();
        if is_blank(id) {
            result.add_message(CmdMessage::warning("Ignored blank product id"));
        } else if store.toggle_favorite(id) {
            result.add_message(CmdMessage::success(format!("Added {} to favorites", id)));
            result.favorite_ids.push(id.to_string());
        } else {
            result.add_message(CmdMessage::success(format!(
                "Removed {} from favorites",
                id
            )));
        }
    }

    Ok(finish(store, result))
}

/// Report membership without changing anything.
pub fn check<B: StorageBackend, I: AsRef<str>>(
    store: &FavoritesStore<B>,
    ids: &[I],
) -> Result<CmdResult> {
    require_ids(ids)?;
    let mut result = CmdResult::default();

    for id in ids {
        let id: &str = id.as_ref();
        if store.is_favorite(id) {
            result.add_message(CmdMessage::info(format!("{}: favorite", id)));
            result.favorite_ids.push(id.to_string());
        } else {
            result.add_message(CmdMessage::info(format!("{}: not a favorite", id)));
        }
    }

    result.favorite_count = Some(store.favorite_count());
    Ok(result)
}

pub fn list<B: StorageBackend>(store: &FavoritesStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult {
        favorite_ids: store.favorite_ids(),
        favorite_count: Some(store.favorite_count()),
        ..Default::default()
    };
    if result.favorite_ids.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet."));
    }
    Ok(result)
}

pub fn count<B: StorageBackend>(store: &FavoritesStore<B>) -> Result<CmdResult> {
    Ok(CmdResult {
        favorite_count: Some(store.favorite_count()),
        ..Default::default()
    })
}

pub fn clear<B: StorageBackend>(store: &mut FavoritesStore<B>) -> Result<CmdResult> {
    let cleared = store.favorite_count();
    store.clear_favorites();
    let result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Cleared {} favorite{}",
        cleared,
        if cleared == 1 { "" } else { "s" }
    )));
    Ok(finish(store, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::MemBackend;
    use std::rc::Rc;

    fn store() -> FavoritesStore<MemBackend> {
        FavoritesStore::load(MemBackend::new())
    }

    #[test]
    fn add_reports_new_and_existing() {
        let mut store = store();
        add(&mut store, &["p1"]).unwrap();
        let result = add(&mut store, &["p1", "p2"]).unwrap();

        assert_eq!(result.favorite_ids, vec!["p2"]);
        assert_eq!(result.favorite_count, Some(2));
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[1].content, "Added p2 to favorites");
    }

    #[test]
    fn add_requires_ids() {
        let mut store = store();
        let empty: [&str; 0] = [];
        assert!(add(&mut store, &empty).is_err());
    }

    #[test]
    fn blank_ids_produce_warnings() {
        let mut store = store();
        let result = add(&mut store, &["", "p1"]).unwrap();
        assert!(result.has_warnings());
        assert_eq!(result.favorite_count, Some(1));
    }

    #[test]
    fn remove_reports_missing_ids() {
        let mut store = store();
        add(&mut store, &["p1"]).unwrap();
        let result = remove(&mut store, &["p1", "p9"]).unwrap();
        assert_eq!(result.messages[0].content, "Removed p1 from favorites");
        assert_eq!(result.messages[1].content, "p9 was not a favorite");
        assert_eq!(result.favorite_count, Some(0));
    }

    #[test]
    fn toggle_lists_ids_that_became_favorites() {
        let mut store = store();
        add(&mut store, &["p1"]).unwrap();
        let result = toggle(&mut store, &["p1", "p2"]).unwrap();
        assert_eq!(result.favorite_ids, vec!["p2"]);
        assert!(!store.is_favorite("p1"));
        assert!(store.is_favorite("p2"));
    }

    #[test]
    fn check_does_not_mutate() {
        let backend = Rc::new(MemBackend::new());
        let mut store = FavoritesStore::load(Rc::clone(&backend));
        add(&mut store, &["p1"]).unwrap();
        let before = backend.raw(crate::favorites::FAVORITES_KEY);

        let result = check(&store, &["p1", "p2"]).unwrap();
        assert_eq!(result.favorite_ids, vec!["p1"]);
        assert_eq!(result.messages[1].content, "p2: not a favorite");
        assert_eq!(backend.raw(crate::favorites::FAVORITES_KEY), before);
    }

    #[test]
    fn list_empty_store() {
        let store = store();
        let result = list(&store).unwrap();
        assert!(result.favorite_ids.is_empty());
        assert_eq!(result.messages[0].content, "No favorites yet.");
    }

    #[test]
    fn list_is_sorted() {
        let mut store = store();
        add(&mut store, &["p3", "p1", "p2"]).unwrap();
        let result = list(&store).unwrap();
        assert_eq!(result.favorite_ids, vec!["p1", "p2", "p3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn count_reports_cardinality() {
        let mut store = store();
        add(&mut store, &["p1", "p2", "p3"]).unwrap();
        assert_eq!(count(&store).unwrap().favorite_count, Some(3));
    }

    #[test]
    fn clear_reports_how_many() {
        let mut store = store();
        add(&mut store, &["p1", "p2"]).unwrap();
        let result = clear(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "Cleared 2 favorites");
        assert_eq!(result.favorite_count, Some(0));
    }

    #[test]
    fn failed_write_surfaces_warning() {
        let backend = Rc::new(MemBackend::new());
        let mut store = FavoritesStore::load(Rc::clone(&backend));
        backend.set_simulate_write_error(true);

        let result = add(&mut store, &["p1"]).unwrap();
        assert!(result.has_warnings());
        assert!(result
            .messages
            .last()
            .unwrap()
            .content
            .starts_with("Changes may not be saved"));
        assert!(store.is_favorite("p1"));
    }
}
