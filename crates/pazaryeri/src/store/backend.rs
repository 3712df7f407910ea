use crate::error::Result;
use std::rc::Rc;

/// Abstract interface for the key-value storage medium.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`PersistSlot`](super::PersistSlot) handles the "what" (envelope, versioning,
/// failure policy). All methods take `&self`; implementations that need to
/// mutate use interior mutability.
pub trait StorageBackend {
    /// Read the raw serialized value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disabled storage).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
