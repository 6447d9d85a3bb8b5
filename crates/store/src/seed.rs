//! Seed templates used to initialize the persisted document.
//!
//! On first run (no persisted file) the store copies the seed into place.
//! A malformed persisted file also falls back to the seed.

use std::fs;
use std::path::{Path, PathBuf};

use apa_core::Document;

use crate::error::{Result, StoreError};

/// The template shipped with the crate.
pub const BUNDLED_SEED_JSON: &str = include_str!("../assets/app_data.json");

/// Source of the default document.
pub trait SeedSource: Send + Sync {
    /// Produce the seed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be read or parsed.
    fn load(&self) -> Result<Document>;
}

/// The template compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSeed;

impl SeedSource for BundledSeed {
    fn load(&self) -> Result<Document> {
        Document::from_json(BUNDLED_SEED_JSON).map_err(|source| StoreError::Parse {
            path: PathBuf::from("<bundled>"),
            source,
        })
    }
}

/// A template read from disk on every use.
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedSource for FileSeed {
    fn load(&self) -> Result<Document> {
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        Document::from_json(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// An in-memory document serves as its own seed.
impl SeedSource for Document {
    fn load(&self) -> Result<Document> {
        Ok(self.clone())
    }
}
