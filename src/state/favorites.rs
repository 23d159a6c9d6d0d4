//! Favorites state: the set of products the user has marked, mirrored to
//! persistent storage.
//!
//! DESIGN
//! ======
//! The store is a two-state machine, `Loading -> Ready`. The initial load
//! runs once, after first render, and never fails outward: a missing or
//! corrupt entry yields an empty set. Writes are only legal in `Ready`, so a
//! toggle made during the load window can never overwrite saved favorites
//! with an empty mapping. Such early toggles are kept in memory and replayed
//! on top of the loaded set when it arrives.
//!
//! Every mutation in `Ready` rewrites the whole mapping.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::HashMap;

use crate::net::types::Product;
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json_or_default, save_json};

/// Lifecycle of the initial load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Stored favorites not read yet; membership is not known.
    #[default]
    Loading,
    /// Stored favorites read (or defaulted); writes are allowed.
    Ready,
}

/// Favorites keyed by product id, backed by a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct FavoritesStore<S> {
    store: S,
    key: String,
    phase: LoadPhase,
    items: HashMap<u64, Product>,
    early_toggles: Vec<Product>,
}

/// Favorites backed by browser `localStorage`, as provided to the UI.
pub type FavoritesState = FavoritesStore<BrowserStorage>;

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            phase: LoadPhase::Loading,
            items: HashMap::new(),
            early_toggles: Vec::new(),
        }
    }

    /// Read stored favorites. Only the first call does anything.
    pub fn load(&mut self) {
        if self.phase == LoadPhase::Ready {
            return;
        }

        self.items = load_json_or_default(&self.store, &self.key);
        self.phase = LoadPhase::Ready;

        let replay = std::mem::take(&mut self.early_toggles);
        let replayed = !replay.is_empty();
        for product in replay {
            flip(&mut self.items, product);
        }
        log::debug!("favorites loaded: {} stored", self.items.len());

        if replayed {
            self.persist();
        }
    }

    /// Add `product` if absent, remove it if present.
    pub fn toggle(&mut self, product: Product) {
        match self.phase {
            LoadPhase::Loading => {
                self.early_toggles.push(product.clone());
                flip(&mut self.items, product);
            }
            LoadPhase::Ready => {
                flip(&mut self.items, product);
                self.persist();
            }
        }
    }

    pub fn is_favorite(&self, product_id: u64) -> bool {
        self.items.contains_key(&product_id)
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        debug_assert_eq!(self.phase, LoadPhase::Ready);
        save_json(&self.store, &self.key, &self.items);
    }
}

// Membership is key presence, never value inspection.
fn flip(items: &mut HashMap<u64, Product>, product: Product) {
    if items.remove(&product.id).is_none() {
        items.insert(product.id, product);
    }
}
