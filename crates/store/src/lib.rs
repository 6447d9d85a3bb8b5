//! APA Store - Local persistence for the supermarket app.
//!
//! All persisted state lives in one JSON document (catalog, saved carts and
//! last purchase). The document is seeded from a bundled template on first
//! use and rewritten whole on every change.
//!
//! # Modules
//!
//! - [`store`] - [`DataStore`], the document queries and commands
//! - [`state`] - [`ShopState`], the live cart and its checkpoints
//! - [`handle`] - [`AsyncDataStore`], serialized access off the caller's thread
//! - [`seed`] - Seed templates
//! - [`images`] - Local image name resolution
//! - [`file`] - Atomic whole-file reads and writes
//! - [`config`] - Environment configuration
//! - [`error`] - Error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod file;
pub mod handle;
pub mod images;
pub mod seed;
pub mod state;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StoreError};
pub use handle::AsyncDataStore;
pub use images::{ImageDir, ImageResolver, NoImages};
pub use seed::{BUNDLED_SEED_JSON, BundledSeed, FileSeed, SeedSource};
pub use state::{ShopError, ShopState};
pub use store::DataStore;
