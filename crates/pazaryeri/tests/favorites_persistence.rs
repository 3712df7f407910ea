use pazaryeri::favorites::{FavoritesStore, FAVORITES_KEY};
use pazaryeri::model::ThemeMode;
use pazaryeri::store::FsBackend;
use pazaryeri::theme::ThemeStore;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

#[test]
fn favorites_survive_reload_from_disk() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
        store.add_favorite("p1");
        store.add_favorite("p2");
    }

    let store = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert!(store.is_favorite("p1"));
    assert!(store.is_favorite("p2"));
    assert_eq!(store.favorite_count(), 2);
}

#[test]
fn snapshot_on_disk_is_an_ordered_sequence() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
    store.add_favorite("zeta");
    store.add_favorite("alpha");
    store.add_favorite("alpha");

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", FAVORITES_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["state"]["favoriteIds"], serde_json::json!(["alpha", "zeta"]));
    assert_eq!(value["version"], 0);
}

#[test]
fn round_trip_preserves_membership() {
    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec!["p1"],
        vec!["p1", "p1", "p2", "p1"],
        vec!["ürün-42", "product with spaces", "p/3"],
    ];

    for ids in cases {
        let dir = TempDir::new().unwrap();
        let mut original = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
        for id in &ids {
            original.add_favorite(id);
        }
        // Force a write even for the empty case.
        original.clear_favorites();
        for id in &ids {
            original.add_favorite(id);
        }

        let reloaded = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
        assert_eq!(reloaded.favorites(), original.favorites(), "ids: {:?}", ids);
    }
}

#[test]
fn corrupt_file_starts_empty_and_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(format!("{}.json", FAVORITES_KEY));
    fs::write(&path, "\u{0}\u{0}garbage").unwrap();

    let mut store = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(store.favorite_count(), 0);

    store.add_favorite("p1");
    let reloaded = FavoritesStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert!(reloaded.is_favorite("p1"));
}

#[test]
fn favorites_and_theme_share_a_directory() {
    let dir = TempDir::new().unwrap();
    let backend = Rc::new(FsBackend::new(dir.path().to_path_buf()));

    let mut favorites = FavoritesStore::load(Rc::clone(&backend));
    let mut theme = ThemeStore::load(Rc::clone(&backend));
    favorites.add_favorite("p1");
    theme.set_mode(ThemeMode::Dark);

    let favorites = FavoritesStore::load(Rc::clone(&backend));
    let theme = ThemeStore::load(backend);
    assert!(favorites.is_favorite("p1"));
    assert_eq!(theme.mode(), ThemeMode::Dark);
}
