//! Catalog browsing.

use apa_core::{Product, ProductId};
use apa_store::AsyncDataStore;
use tracing::info;

use super::CommandError;

fn log_product(product: &Product) {
    info!(id = %product.id, price = %product.price, "{}", product.name);
}

/// # Errors
///
/// Returns an error if the store task fails.
pub async fn list(store: &AsyncDataStore) -> Result<(), CommandError> {
    let catalog = store.load_catalog().await?;
    catalog.iter().for_each(log_product);
    info!(count = catalog.len(), "Products");
    Ok(())
}

/// # Errors
///
/// Returns an error if the store task fails.
pub async fn search(store: &AsyncDataStore, query: String) -> Result<(), CommandError> {
    let hits = store.search_catalog(query).await?;
    hits.iter().for_each(log_product);
    info!(count = hits.len(), "Matches");
    Ok(())
}

/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown product.
pub async fn show(store: &AsyncDataStore, id: ProductId) -> Result<(), CommandError> {
    let product = store
        .find_product(id.clone())
        .await?
        .ok_or_else(|| CommandError::NotFound {
            kind: "product",
            id: id.to_string(),
        })?;

    log_product(&product);
    if let Some(image) = &product.image {
        info!(path = %image.path().display(), "Local image");
    }
    if let Some(url) = &product.image_url {
        info!(%url, "Remote image");
    }
    Ok(())
}
