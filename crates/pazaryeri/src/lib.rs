//! # Pazaryeri Storefront State
//!
//! Client-side state for the Pazaryeri storefront: the shopper's favorite
//! products and their theme preference, both surviving restarts through a
//! pluggable storage medium.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (pazaryeri-cli crate)                                  │
//! │  - Parses arguments, renders CmdResult, owns stdout/stderr  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the stores, dispatches to commands                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operations returning structured CmdResult values         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (favorites.rs, theme.rs)                            │
//! │  - Authoritative in-memory state, persisted on mutation     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait, FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient State
//!
//! There is no global store. [`init::initialize`] builds the stores once and
//! the UI passes them (through [`api::StorefrontApi`]) wherever they are needed.
//!
//! ## Failure Policy
//!
//! Storage problems never take the process down. Unreadable snapshots start a
//! store from its default; failed writes are logged through `tracing`,
//! recorded in the store's persist status, and surfaced by commands as
//! warnings.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Operations behind each UI action
//! - [`favorites`]: The favorites store
//! - [`theme`]: The theme preference store
//! - [`observer`]: Change notification
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`FavoriteSet`, snapshots, `ThemeMode`)
//! - [`config`]: Configuration management
//! - [`init`]: Startup wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod init;
pub mod model;
pub mod observer;
pub mod store;
pub mod theme;
