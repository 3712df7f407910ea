//! # Favorites Store
//!
//! The authoritative set of favorited product ids for the current session,
//! kept in sync with a slot in the storage medium.
//!
//! ## Lifecycle
//!
//! - [`FavoritesStore::load`] rehydrates from the stored snapshot. Absent,
//!   corrupt or too-new snapshots start the store empty.
//! - Every mutating call writes the whole set back and then notifies observers.
//!   Idempotent calls (adding a present id, removing an absent one) still write
//!   and notify.
//! - Storage failures are logged and recorded in [`FavoritesStore::persist_status`];
//!   the in-memory set stays the source of truth.
//!
//! ## Identifiers
//!
//! Product ids are opaque. The only check is that an id is not blank: blank ids
//! are ignored without touching state, storage or observers.

use crate::model::{FavoriteSet, FavoritesSnapshot};
use crate::observer::{Observers, SubscriptionId};
use crate::store::{PersistSlot, PersistStatus, StorageBackend};
use tracing::debug;

/// Storage key for the favorites snapshot.
pub const FAVORITES_KEY: &str = "pazaryeri-favorites";

pub struct FavoritesStore<B: StorageBackend> {
    favorites: FavoriteSet,
    slot: PersistSlot<B>,
    observers: Observers<FavoriteSet>,
}

impl<B: StorageBackend> FavoritesStore<B> {
    /// Open the store under the default key.
    pub fn load(backend: B) -> Self {
        Self::load_with_key(backend, FAVORITES_KEY)
    }

    pub fn load_with_key(backend: B, key: impl Into<String>) -> Self {
        let slot = PersistSlot::new(backend, key);
        let favorites = slot
            .load::<FavoritesSnapshot>()
            .map(FavoriteSet::from)
            .unwrap_or_default();
        debug!(key = slot.key(), count = favorites.len(), "Rehydrated favorites");
        Self {
            favorites,
            slot,
            observers: Observers::new(),
        }
    }

    /// Returns true if the id was newly added.
    pub fn add_favorite(&mut self, product_id: &str) -> bool {
        if !accept(product_id) {
            return false;
        }
        let added = self.favorites.insert(product_id);
        self.commit();
        added
    }

    /// Returns true if the id was present.
    pub fn remove_favorite(&mut self, product_id: &str) -> bool {
        if !accept(product_id) {
            return false;
        }
        let removed = self.favorites.remove(product_id);
        self.commit();
        removed
    }

    /// Flip membership. Returns whether the id is a favorite afterwards.
    pub fn toggle_favorite(&mut self, product_id: &str) -> bool {
        if self.is_favorite(product_id) {
            self.remove_favorite(product_id);
            false
        } else {
            self.add_favorite(product_id)
        }
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.contains(product_id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.commit();
    }

    /// Current ids in ascending order.
    pub fn favorite_ids(&self) -> Vec<String> {
        self.favorites.sorted()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn persist_status(&self) -> &PersistStatus {
        self.slot.status()
    }

    pub fn key(&self) -> &str {
        self.slot.key()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&FavoriteSet) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn commit(&mut self) {
        self.slot.save(&FavoritesSnapshot::from(&self.favorites));
        self.observers.notify(&self.favorites);
    }
}

fn accept(product_id: &str) -> bool {
    if product_id.trim().is_empty() {
        debug!("Ignoring blank product id");
        return false;
    }
    true
}
