use super::*;
use crate::util::storage::storage_test::{MemoryStorage, StorageOp};

const KEY: &str = "shopscope_favorites";

fn product(id: u64) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        price: 10.0 + f64::from(u32::try_from(id).unwrap()),
        thumbnail: format!("https://cdn.test/{id}.png"),
    }
}

fn stored(products: &[Product]) -> String {
    let map: HashMap<u64, Product> = products.iter().map(|p| (p.id, p.clone())).collect();
    serde_json::to_string(&map).unwrap()
}

fn ready_store(storage: MemoryStorage) -> FavoritesStore<MemoryStorage> {
    let mut favorites = FavoritesStore::new(storage, KEY);
    favorites.load();
    favorites
}

fn persisted_ids(favorites: &FavoritesStore<MemoryStorage>) -> Vec<u64> {
    let raw = favorites.store.peek(KEY).unwrap();
    let map: HashMap<u64, Product> = serde_json::from_str(&raw).unwrap();
    let mut ids: Vec<u64> = map.into_keys().collect();
    ids.sort_unstable();
    ids
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn new_store_is_loading_and_unknown() {
    let favorites = FavoritesStore::new(MemoryStorage::new(), KEY);
    assert_eq!(favorites.phase, LoadPhase::Loading);
    assert!(!favorites.is_ready());
    assert!(favorites.is_empty());
}

#[test]
fn load_reads_stored_mapping() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1), product(5)]));
    let favorites = ready_store(storage);
    assert!(favorites.is_ready());
    assert_eq!(favorites.len(), 2);
    assert!(favorites.is_favorite(1));
    assert!(favorites.is_favorite(5));
    assert_eq!(favorites.items.get(&5), Some(&product(5)));
}

#[test]
fn load_of_absent_key_is_ready_and_empty() {
    let favorites = ready_store(MemoryStorage::new());
    assert!(favorites.is_ready());
    assert!(favorites.is_empty());
}

#[test]
fn load_of_corrupt_entry_falls_back_to_empty() {
    let storage = MemoryStorage::new().with_entry(KEY, "{\"1\": {\"id\": ");
    let favorites = ready_store(storage);
    assert!(favorites.is_ready());
    assert!(favorites.is_empty());
}

#[test]
fn load_read_failure_falls_back_to_empty() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    storage.fail_reads(true);
    let favorites = ready_store(storage);
    assert!(favorites.is_ready());
    assert!(favorites.is_empty());
}

#[test]
fn load_happens_once() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    let mut favorites = ready_store(storage);
    favorites.toggle(product(1));
    favorites.load();
    assert!(!favorites.is_favorite(1));
    let reads = favorites
        .store
        .journal()
        .into_iter()
        .filter(|op| matches!(op, StorageOp::Get(_)))
        .count();
    assert_eq!(reads, 1);
}

#[test]
fn load_does_not_write_without_early_toggles() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    let favorites = ready_store(storage);
    assert_eq!(favorites.store.journal(), vec![StorageOp::Get(KEY.to_owned())]);
}

// =============================================================
// Persistence gate
// =============================================================

#[test]
fn toggles_before_load_never_write() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    let mut favorites = FavoritesStore::new(storage, KEY);
    favorites.toggle(product(2));
    favorites.toggle(product(3));
    assert!(favorites.store.journal().is_empty());
    assert!(favorites.is_favorite(2));
}

#[test]
fn first_store_access_is_the_load_read() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    let mut favorites = FavoritesStore::new(storage, KEY);
    favorites.toggle(product(2));
    favorites.load();
    favorites.toggle(product(3));

    let journal = favorites.store.journal();
    assert_eq!(journal.first(), Some(&StorageOp::Get(KEY.to_owned())));
    assert!(journal.iter().skip(1).all(|op| matches!(op, StorageOp::Set(k, _) if k == KEY)));
}

#[test]
fn early_toggles_replay_onto_loaded_mapping() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1), product(2)]));
    let mut favorites = FavoritesStore::new(storage, KEY);
    favorites.toggle(product(2));
    favorites.toggle(product(3));
    favorites.load();

    assert!(favorites.is_favorite(1));
    assert!(!favorites.is_favorite(2));
    assert!(favorites.is_favorite(3));
    assert_eq!(persisted_ids(&favorites), vec![1, 3]);
}

#[test]
fn every_ready_toggle_writes_full_mapping() {
    let mut favorites = ready_store(MemoryStorage::new());
    favorites.toggle(product(4));
    favorites.toggle(product(9));
    assert_eq!(persisted_ids(&favorites), vec![4, 9]);
    favorites.toggle(product(4));
    assert_eq!(persisted_ids(&favorites), vec![9]);

    let writes = favorites
        .store
        .journal()
        .into_iter()
        .filter(|op| matches!(op, StorageOp::Set(..)))
        .count();
    assert_eq!(writes, 3);
}

#[test]
fn removing_last_favorite_persists_empty_object() {
    let mut favorites = ready_store(MemoryStorage::new());
    favorites.toggle(product(4));
    favorites.toggle(product(4));
    assert_eq!(favorites.store.peek(KEY).as_deref(), Some("{}"));
}

#[test]
fn write_failure_keeps_in_memory_state() {
    let mut favorites = ready_store(MemoryStorage::new());
    favorites.store.fail_writes(true);
    favorites.toggle(product(7));
    assert!(favorites.is_favorite(7));
    assert_eq!(favorites.store.peek(KEY), None);
}

#[test]
fn persisted_format_is_object_keyed_by_string_id() {
    let mut favorites = ready_store(MemoryStorage::new());
    favorites.toggle(product(12));
    let raw = favorites.store.peek(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["12"]["id"], 12);
    assert_eq!(value["12"]["title"], "Product 12");
}

// =============================================================
// Toggle semantics
// =============================================================

#[test]
fn toggle_twice_restores_prior_mapping() {
    let storage = MemoryStorage::new().with_entry(KEY, &stored(&[product(1)]));
    let mut favorites = ready_store(storage);
    let before = favorites.items.clone();
    favorites.toggle(product(8));
    favorites.toggle(product(8));
    assert_eq!(favorites.items, before);
    favorites.toggle(product(1));
    favorites.toggle(product(1));
    assert_eq!(favorites.items, before);
}

#[test]
fn membership_tracks_toggle_parity() {
    let mut favorites = ready_store(MemoryStorage::new());
    let sequence = [1_u64, 2, 1, 3, 3, 3, 2, 2, 4, 1];
    for id in sequence {
        favorites.toggle(product(id));
    }
    for id in 1..=5 {
        let count = sequence.iter().filter(|&&x| x == id).count();
        assert_eq!(favorites.is_favorite(id), count % 2 == 1, "id {id}");
    }
}

#[test]
fn membership_uses_key_presence_not_snapshot_contents() {
    let mut favorites = ready_store(MemoryStorage::new());
    let blank = Product { id: 0, title: String::new(), price: 0.0, thumbnail: String::new() };
    favorites.toggle(blank.clone());
    assert!(favorites.is_favorite(0));
    favorites.toggle(blank);
    assert!(!favorites.is_favorite(0));
}

#[test]
fn toggle_removes_by_id_even_with_different_snapshot() {
    let mut favorites = ready_store(MemoryStorage::new());
    favorites.toggle(product(3));
    let mut repriced = product(3);
    repriced.price = 1.0;
    favorites.toggle(repriced);
    assert!(!favorites.is_favorite(3));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_backed_store_loads_empty_natively() {
    let mut favorites = FavoritesState::new(BrowserStorage, KEY);
    assert!(!favorites.is_ready());
    favorites.load();
    assert!(favorites.is_ready());
    assert!(favorites.is_empty());
}
