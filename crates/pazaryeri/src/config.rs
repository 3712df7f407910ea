//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `PAZARYERI_DATA_DIR`, `PAZARYERI_FAVORITES_KEY`, `PAZARYERI_THEME_KEY`.
//! 2. **Config file**: `pazaryeri.toml` in the OS config directory (via `directories`).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | platform data dir | Where persisted state lives |
//! | `favorites_key` | `pazaryeri-favorites` | Storage key of the favorites snapshot |
//! | `theme_key` | `pazaryeri-theme` | Storage key of the theme snapshot |

use crate::error::{Result, StorefrontError};
use crate::favorites::FAVORITES_KEY;
use crate::store::validate_key;
use crate::theme::THEME_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "pazaryeri.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for persisted state. When absent, the platform data directory is used.
    #[config(env = "PAZARYERI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage key of the favorites snapshot.
    #[config(default = "pazaryeri-favorites", env = "PAZARYERI_FAVORITES_KEY")]
    pub favorites_key: String,

    /// Storage key of the theme snapshot.
    #[config(default = "pazaryeri-theme", env = "PAZARYERI_THEME_KEY")]
    pub theme_key: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            favorites_key: FAVORITES_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the environment and `config_file` (a missing file is fine).
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    /// Each store needs its own namespace in the storage medium.
    pub fn validate(&self) -> Result<()> {
        if self.favorites_key.trim().is_empty() || self.theme_key.trim().is_empty() {
            return Err(StorefrontError::Config(
                "Storage keys must not be empty".to_string(),
            ));
        }
        for key in [&self.favorites_key, &self.theme_key] {
            validate_key(key).map_err(|e| StorefrontError::Config(e.to_string()))?;
        }
        if self.favorites_key == self.theme_key {
            return Err(StorefrontError::Config(format!(
                "favorites_key and theme_key must differ (both are '{}')",
                self.favorites_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.favorites_key, "pazaryeri-favorites");
        assert_eq!(config.theme_key, "pazaryeri-theme");
        assert!(config.data_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_key_chars_rejected() {
        for bad in ["shop/favs", ".hidden", "../escape", "two words"] {
            let config = StorefrontConfig {
                favorites_key: bad.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(StorefrontError::Config(_))),
                "{bad:?} should be rejected"
            );
        }
        let config = StorefrontConfig {
            theme_key: "shop\\theme".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_colliding_keys_rejected() {
        let config = StorefrontConfig {
            theme_key: "pazaryeri-favorites".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = StorefrontConfig {
            favorites_key: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "data_dir = \"/srv/pazaryeri\"\nfavorites_key = \"shop-favorites\"\n",
        )
        .unwrap();

        let config = StorefrontConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/pazaryeri")));
        assert_eq!(config.favorites_key, "shop-favorites");
        assert_eq!(config.theme_key, "pazaryeri-theme");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = StorefrontConfig::load(Some(&temp.path().join(CONFIG_FILENAME))).unwrap();
        assert_eq!(config.favorites_key, "pazaryeri-favorites");
    }

    #[test]
    fn test_colliding_keys_in_file_fail_to_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "favorites_key = \"same\"\ntheme_key = \"same\"\n").unwrap();
        assert!(StorefrontConfig::load(Some(&path)).is_err());
    }
}
