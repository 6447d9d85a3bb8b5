//! The app data store.
//!
//! [`DataStore`] is the sole authority for persisted state. It keeps nothing
//! in memory between calls: every query re-reads the document and every
//! command re-reads, modifies and rewrites the whole file.
//!
//! # Failure handling
//!
//! - Missing file: the seed is copied into place and returned.
//! - Unreadable or malformed file: the seed is returned (not persisted).
//! - Unreadable seed: an empty document is used.
//! - Write failure: logged and returned to the caller.
//!
//! Access is single-writer. Use [`crate::AsyncDataStore`] to share a store
//! between tasks.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use apa_core::{Cart, Document, Product, ProductId, ProductRecord, SavedCartId, SavedCartRecord};
use tracing::{error, info, instrument, warn};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::file::DocumentFile;
use crate::images::{ImageDir, ImageResolver, NoImages};
use crate::seed::{BundledSeed, FileSeed, SeedSource};

/// File-backed store for the catalog, saved carts and last purchase.
#[derive(Clone)]
pub struct DataStore {
    file: DocumentFile,
    seed: Arc<dyn SeedSource>,
    images: Arc<dyn ImageResolver>,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("path", &self.file.path())
            .finish_non_exhaustive()
    }
}

impl DataStore {
    /// A store at `path` seeded from the bundled template, without image
    /// resolution.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: DocumentFile::new(path),
            seed: Arc::new(BundledSeed),
            images: Arc::new(NoImages),
        }
    }

    /// Build a store from configuration.
    #[must_use]
    pub fn from_config(config: &StoreConfig) -> Self {
        let mut store = Self::new(config.data_path());
        if let Some(seed_path) = &config.seed_path {
            store = store.with_seed(FileSeed::new(seed_path));
        }
        if let Some(image_dir) = &config.image_dir {
            store = store.with_images(ImageDir::new(image_dir));
        }
        store
    }

    /// Replace the seed source.
    #[must_use]
    pub fn with_seed(mut self, seed: impl SeedSource + 'static) -> Self {
        self.seed = Arc::new(seed);
        self
    }

    /// Replace the image resolver.
    #[must_use]
    pub fn with_images(mut self, images: impl ImageResolver + 'static) -> Self {
        self.images = Arc::new(images);
        self
    }

    /// Location of the persisted document.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All catalog products, with local images resolved.
    ///
    /// Empty if neither the persisted file nor the seed can be loaded.
    #[instrument(skip(self))]
    pub fn load_catalog(&self) -> Vec<Product> {
        self.load_document()
            .products
            .into_iter()
            .map(|record| self.to_product(record))
            .collect()
    }

    /// The catalog product with `id`, if any.
    #[instrument(skip(self))]
    pub fn find_product(&self, id: &ProductId) -> Option<Product> {
        self.load_document()
            .products
            .into_iter()
            .find(|record| &record.id == id)
            .map(|record| self.to_product(record))
    }

    /// Products whose name contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub fn search_catalog(&self, query: &str) -> Vec<Product> {
        self.load_catalog()
            .into_iter()
            .filter(|product| product.matches(query))
            .collect()
    }

    /// Saved carts in stored order.
    #[instrument(skip(self))]
    pub fn load_saved_carts(&self) -> Vec<SavedCartRecord> {
        self.load_document().saved_carts
    }

    /// The last confirmed purchase, empty if none.
    #[instrument(skip(self))]
    pub fn load_last_purchase(&self) -> Cart {
        self.load_document().last_purchase_cart()
    }

    /// Contents of saved cart `id`, empty if it does not exist.
    #[instrument(skip(self))]
    pub fn load_saved_cart(&self, id: &SavedCartId) -> Cart {
        self.load_document()
            .saved_cart(id)
            .map(SavedCartRecord::to_cart)
            .unwrap_or_default()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Append a saved cart and return its new ID.
    ///
    /// The store does not validate `name` or `items`; see
    /// [`crate::ShopState::save_cart`] for the checked entry point.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn save_cart(&self, name: &str, items: &Cart) -> Result<SavedCartId> {
        let mut document = self.load_document();
        let id = document.push_saved_cart(name, items);
        self.persist(&document)?;
        info!(cart_id = %id, "Saved cart");
        Ok(id)
    }

    /// Replace the last purchase.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn save_last_purchase(&self, items: &Cart) -> Result<()> {
        let mut document = self.load_document();
        document.set_last_purchase(items);
        self.persist(&document)
    }

    /// Remove saved cart `id`.
    ///
    /// The document is rewritten even when `id` does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    #[instrument(skip(self))]
    pub fn delete_saved_cart(&self, id: &SavedCartId) -> Result<()> {
        let mut document = self.load_document();
        let removed = document.remove_saved_cart(id);
        self.persist(&document)?;
        if removed {
            info!(cart_id = %id, "Deleted saved cart");
        }
        Ok(())
    }

    /// Replace the items of saved cart `id`. Does nothing if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn update_saved_cart(&self, id: &SavedCartId, items: &Cart) -> Result<()> {
        let mut document = self.load_document();
        let Some(record) = document.saved_cart_mut(id) else {
            return Ok(());
        };
        record.set_items(items);
        self.persist(&document)
    }

    /// Overwrite the persisted document with the seed and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<Document> {
        let document = self.load_seed();
        self.persist(&document)?;
        info!(path = %self.path().display(), "Reset app data to seed");
        Ok(document)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn load_document(&self) -> Document {
        match self.file.read() {
            Ok(Some(document)) => document,
            Ok(None) => {
                let document = self.load_seed();
                info!(path = %self.path().display(), "Seeding app data");
                // Best effort: a failed seed write leaves the next call to retry.
                let _ = self.persist(&document);
                document
            }
            Err(err) => {
                warn!(error = %err, "Falling back to seed data");
                self.load_seed()
            }
        }
    }

    fn load_seed(&self) -> Document {
        self.seed.load().unwrap_or_else(|err| {
            warn!(error = %err, "Seed data unavailable, using empty document");
            Document::default()
        })
    }

    fn persist(&self, document: &Document) -> Result<()> {
        self.file.write(document).inspect_err(|err| {
            error!(error = %err, path = %self.path().display(), "Failed to persist app data");
        })
    }

    fn to_product(&self, record: ProductRecord) -> Product {
        Product::from_record(record, |name| self.images.resolve(name))
    }
}
