//! # Storage Layer
//!
//! Client state survives process restarts by being written to a key-value
//! storage medium. The medium itself is injected: stores never know whether
//! they talk to a directory on disk or a `HashMap` in a test.
//!
//! ## Pieces
//!
//! - [`backend::StorageBackend`]: the raw capability, `read(key)` / `write(key, value)`.
//! - [`fs_backend::FsBackend`]: production backend, one JSON document per key.
//! - [`mem_backend::MemBackend`]: in-memory backend with failure simulation for tests.
//! - [`slot::PersistSlot`]: a store's named slot. Owns the envelope format and the
//!   failure policy (log, record, carry on).
//!
//! ## Snapshot Format
//!
//! Every value is wrapped in an envelope carrying a format version:
//!
//! ```text
//! {"state": {"favoriteIds": ["p1", "p2"]}, "version": 0}
//! ```
//!
//! Snapshots with a version newer than [`slot::SNAPSHOT_VERSION`] are ignored,
//! like corrupt ones.
//!
//! ## Storage Layout
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── pazaryeri-favorites.json   # Favorite product ids
//! └── pazaryeri-theme.json       # Theme preference
//! ```
//!
//! ## Sharing a Medium
//!
//! `StorageBackend` is implemented for `Rc<B>`, so both stores can hold a
//! handle to the same backend.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot;

pub use backend::StorageBackend;
pub use fs_backend::{validate_key, FsBackend};
pub use mem_backend::MemBackend;
pub use slot::{PersistSlot, PersistStatus};
