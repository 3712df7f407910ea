//! Startup wiring: resolve directories, load configuration, open the stores.
//!
//! # Data Directory
//!
//! Resolved in priority order:
//! 1. Explicit override (the CLI's `--data` flag).
//! 2. `PAZARYERI_DATA` environment variable, mainly to isolate tests.
//! 3. `data_dir` from configuration (file or `PAZARYERI_DATA_DIR`).
//! 4. The platform data directory from `directories`.

use crate::api::StorefrontApi;
use crate::config::{StorefrontConfig, CONFIG_FILENAME};
use crate::error::{Result, StorefrontError};
use crate::store::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

pub const DATA_ENV: &str = "PAZARYERI_DATA";

#[derive(Debug, Clone)]
pub struct StorefrontPaths {
    pub data_dir: PathBuf,
    /// Absent when the platform has no config directory.
    pub config_file: Option<PathBuf>,
}

pub struct StorefrontContext {
    pub api: StorefrontApi<Rc<FsBackend>>,
    pub config: StorefrontConfig,
    pub paths: StorefrontPaths,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "pazaryeri", "pazaryeri")
}

/// Pick the data directory from the sources listed in the module docs.
pub fn resolve_data_dir(
    data_override: Option<PathBuf>,
    env_override: Option<PathBuf>,
    config: &StorefrontConfig,
) -> Result<PathBuf> {
    data_override
        .or(env_override)
        .or_else(|| config.data_dir.clone())
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
        .ok_or_else(|| StorefrontError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<StorefrontContext> {
    let config_file = project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME));
    let config = StorefrontConfig::load(config_file.as_deref())?;

    let env_override = std::env::var_os(DATA_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(data_override, env_override, &config)?;
    debug!(data_dir = %data_dir.display(), "Opening storefront state");

    let backend = Rc::new(FsBackend::new(data_dir.clone()));
    let api = StorefrontApi::open(backend, &config)?;

    Ok(StorefrontContext {
        api,
        config,
        paths: StorefrontPaths {
            data_dir,
            config_file,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let config = StorefrontConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(
            Some(PathBuf::from("/from/flag")),
            Some(PathBuf::from("/from/env")),
            &config,
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn env_beats_config() {
        let config = StorefrontConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(None, Some(PathBuf::from("/from/env")), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn config_beats_platform_default() {
        let config = StorefrontConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = resolve_data_dir(None, None, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }
}
