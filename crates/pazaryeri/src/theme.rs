//! Persisted theme preference.
//!
//! Shares the favorites persistence contract under its own storage key.
//! Applying the theme is left to the UI; [`ThemeStore::resolved`] only answers
//! which appearance the preference means on a given platform.

use crate::model::{Appearance, ThemeMode, ThemeSnapshot};
use crate::observer::{Observers, SubscriptionId};
use crate::store::{PersistSlot, PersistStatus, StorageBackend};
use tracing::debug;

/// Storage key for the theme snapshot.
pub const THEME_KEY: &str = "pazaryeri-theme";

pub struct ThemeStore<B: StorageBackend> {
    mode: ThemeMode,
    slot: PersistSlot<B>,
    observers: Observers<ThemeMode>,
}

impl<B: StorageBackend> ThemeStore<B> {
    pub fn load(backend: B) -> Self {
        Self::load_with_key(backend, THEME_KEY)
    }

    pub fn load_with_key(backend: B, key: impl Into<String>) -> Self {
        let slot = PersistSlot::new(backend, key);
        let mode = slot
            .load::<ThemeSnapshot>()
            .map(|snapshot| snapshot.mode)
            .unwrap_or_default();
        debug!(key = slot.key(), %mode, "Rehydrated theme");
        Self {
            mode,
            slot,
            observers: Observers::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.slot.save(&ThemeSnapshot { mode });
        self.observers.notify(&self.mode);
    }

    /// Dark goes to light; light and system go to dark. Returns the new mode.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        let next = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light | ThemeMode::System => ThemeMode::Dark,
        };
        self.set_mode(next);
        next
    }

    pub fn resolved(&self, system_prefers_dark: bool) -> Appearance {
        self.mode.resolve(system_prefers_dark)
    }

    pub fn persist_status(&self) -> &PersistStatus {
        self.slot.status()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&ThemeMode) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
