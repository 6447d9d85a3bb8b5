//! Integration tests for APA Supermercados.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p apa-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_rules` - Cart update rules across whole sessions
//! - `data_store` - Persistence against real files
//! - `async_store` - Shared store access from tasks
//!
//! Every test works in its own [`TestDir`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use apa_store::DataStore;
use tempfile::TempDir;

/// A scratch directory holding one data file, removed on drop.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the data file inside this directory.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("app_data.json")
    }

    /// A store writing to [`TestDir::data_path`] with the bundled seed.
    #[must_use]
    pub fn store(&self) -> DataStore {
        DataStore::new(self.data_path())
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
