//! Async access to a [`DataStore`].
//!
//! File I/O runs on tokio's blocking pool. Operations are serialized by a
//! mutex, so the most recent write wins and a read observes every write that
//! completed before it.

use std::sync::Arc;

use apa_core::{Cart, Document, Product, ProductId, SavedCartId, SavedCartRecord};
use tokio::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::store::DataStore;

/// Cloneable async handle to a shared store.
#[derive(Debug, Clone)]
pub struct AsyncDataStore {
    inner: Arc<Mutex<DataStore>>,
}

impl AsyncDataStore {
    #[must_use]
    pub fn new(store: DataStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `op` against the store on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&DataStore) -> T + Send + 'static,
    {
        let store = Arc::clone(&self.inner).lock_owned().await;
        tokio::task::spawn_blocking(move || op(&*store))
            .await
            .map_err(|err| StoreError::Task(err.to_string()))
    }

    /// Run `op` with exclusive access to the store.
    ///
    /// Use this for read-modify-write sequences that must not interleave with
    /// other operations on the same handle.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&DataStore) -> T + Send + 'static,
    {
        self.run(op).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn load_catalog(&self) -> Result<Vec<Product>> {
        self.run(DataStore::load_catalog).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn find_product(&self, id: ProductId) -> Result<Option<Product>> {
        self.run(move |store| store.find_product(&id)).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn search_catalog(&self, query: String) -> Result<Vec<Product>> {
        self.run(move |store| store.search_catalog(&query)).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn load_saved_carts(&self) -> Result<Vec<SavedCartRecord>> {
        self.run(DataStore::load_saved_carts).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn load_last_purchase(&self) -> Result<Cart> {
        self.run(DataStore::load_last_purchase).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Task` if the blocking task fails.
    pub async fn load_saved_cart(&self, id: SavedCartId) -> Result<Cart> {
        self.run(move |store| store.load_saved_cart(&id)).await
    }

    /// # Errors
    ///
    /// Returns an error if the write or the blocking task fails.
    pub async fn save_cart(&self, name: String, items: Cart) -> Result<SavedCartId> {
        self.run(move |store| store.save_cart(&name, &items)).await?
    }

    /// # Errors
    ///
    /// Returns an error if the write or the blocking task fails.
    pub async fn save_last_purchase(&self, items: Cart) -> Result<()> {
        self.run(move |store| store.save_last_purchase(&items)).await?
    }

    /// # Errors
    ///
    /// Returns an error if the write or the blocking task fails.
    pub async fn delete_saved_cart(&self, id: SavedCartId) -> Result<()> {
        self.run(move |store| store.delete_saved_cart(&id)).await?
    }

    /// # Errors
    ///
    /// Returns an error if the write or the blocking task fails.
    pub async fn update_saved_cart(&self, id: SavedCartId, items: Cart) -> Result<()> {
        self.run(move |store| store.update_saved_cart(&id, &items)).await?
    }

    /// # Errors
    ///
    /// Returns an error if the write or the blocking task fails.
    pub async fn reset(&self) -> Result<Document> {
        self.run(DataStore::reset).await?
    }
}
