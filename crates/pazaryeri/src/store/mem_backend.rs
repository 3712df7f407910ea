use super::backend::StorageBackend;
use crate::error::{Result, StorefrontError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the stores are single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without reaching for locks.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation (quota exceeded, storage disabled).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Test helper to seed a raw value, bypassing the envelope.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Test helper to inspect what was written under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(StorefrontError::Store("Simulated read error".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StorefrontError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("nothing").unwrap(), None);
    }

    #[test]
    fn write_replaces_previous_value() {
        let backend = MemBackend::new();
        backend.write("k", "one").unwrap();
        backend.write("k", "two").unwrap();
        assert_eq!(backend.read("k").unwrap(), Some("two".to_string()));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_old_value() {
        let backend = MemBackend::new();
        backend.write("k", "kept").unwrap();
        backend.set_simulate_write_error(true);
        assert!(backend.write("k", "lost").is_err());
        assert_eq!(backend.raw("k"), Some("kept".to_string()));
    }

    #[test]
    fn simulated_read_error() {
        let backend = MemBackend::new();
        backend.insert_raw("k", "v");
        backend.set_simulate_read_error(true);
        assert!(backend.read("k").is_err());
    }
}
