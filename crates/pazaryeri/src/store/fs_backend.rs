use super::backend::StorageBackend;
use crate::error::{Result, StorefrontError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based storage: each key is one JSON document under `root`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StorefrontError::Io)?;
        }
        Ok(())
    }
}

/// Keys become file names, so they are limited to a portable character set
/// and may not start with a dot (reserved for temp files).
pub fn validate_key(key: &str) -> Result<()> {
    let valid_chars = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if key.is_empty() || key.starts_with('.') || !valid_chars {
        return Err(StorefrontError::Store(format!(
            "Invalid storage key: {:?}",
            key
        )));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(StorefrontError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let target = self.path_for(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(StorefrontError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(StorefrontError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_that_escape_the_root() {
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("").is_err());
    }

    #[test]
    fn accepts_store_keys() {
        assert!(validate_key("pazaryeri-favorites").is_ok());
        assert!(validate_key("pazaryeri_theme.v2").is_ok());
    }

    #[test]
    fn path_for_appends_json() {
        let backend = FsBackend::new(PathBuf::from("/data"));
        assert_eq!(
            backend.path_for("pazaryeri-theme").unwrap(),
            PathBuf::from("/data/pazaryeri-theme.json")
        );
    }
}
