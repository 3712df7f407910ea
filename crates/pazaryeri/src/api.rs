//! # API Facade
//!
//! The single entry point for storefront state operations, whatever the UI.
//!
//! The facade:
//! - **Owns** the stores, created once at startup and passed to the UI explicitly
//! - **Dispatches** to the command functions
//! - **Returns** structured `CmdResult` values, never strings
//!
//! Business logic lives in `commands/*.rs`; persistence rules live in the stores.
//!
//! ## Generic Over StorageBackend
//!
//! `StorefrontApi<B>` works with any medium:
//! - Production: `StorefrontApi<Rc<FsBackend>>`
//! - Testing: `StorefrontApi<Rc<MemBackend>>`

use crate::commands::{self, CmdResult};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::model::ThemeMode;
use crate::store::StorageBackend;
use crate::theme::ThemeStore;

pub struct StorefrontApi<B: StorageBackend> {
    favorites: FavoritesStore<B>,
    theme: ThemeStore<B>,
}

impl<B: StorageBackend> StorefrontApi<B> {
    pub fn new(favorites: FavoritesStore<B>, theme: ThemeStore<B>) -> Self {
        Self { favorites, theme }
    }

    /// Rehydrate both stores from one shared medium, using the configured keys.
    pub fn open(backend: B, config: &StorefrontConfig) -> Result<Self>
    where
        B: Clone,
    {
        config.validate()?;
        let favorites = FavoritesStore::load_with_key(backend.clone(), &*config.favorites_key);
        let theme = ThemeStore::load_with_key(backend, &*config.theme_key);
        Ok(Self::new(favorites, theme))
    }

    pub fn favorites(&self) -> &FavoritesStore<B> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore<B> {
        &mut self.favorites
    }

    pub fn theme(&self) -> &ThemeStore<B> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeStore<B> {
        &mut self.theme
    }

    pub fn add_favorites<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorites::add(&mut self.favorites, ids)
    }

    pub fn remove_favorites<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorites::remove(&mut self.favorites, ids)
    }

    pub fn toggle_favorites<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<CmdResult> {
        commands::favorites::toggle(&mut self.favorites, ids)
    }

    pub fn check_favorites<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::favorites::check(&self.favorites, ids)
    }

    pub fn list_favorites(&self) -> Result<CmdResult> {
        commands::favorites::list(&self.favorites)
    }

    pub fn count_favorites(&self) -> Result<CmdResult> {
        commands::favorites::count(&self.favorites)
    }

    pub fn clear_favorites(&mut self) -> Result<CmdResult> {
        commands::favorites::clear(&mut self.favorites)
    }

    pub fn show_theme(&self, system_prefers_dark: bool) -> Result<CmdResult> {
        commands::theme::show(&self.theme, system_prefers_dark)
    }

    pub fn set_theme(&mut self, mode: ThemeMode, system_prefers_dark: bool) -> Result<CmdResult> {
        commands::theme::set(&mut self.theme, mode, system_prefers_dark)
    }

    pub fn toggle_theme(&mut self, system_prefers_dark: bool) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.theme, system_prefers_dark)
    }
}
