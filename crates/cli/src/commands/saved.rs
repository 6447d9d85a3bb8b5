//! Saved cart management.

use apa_core::{SavedCartId, share_text};
use apa_store::AsyncDataStore;
use tracing::info;

use super::{CommandError, log_cart, shop_with};
use crate::items::ItemArg;

/// # Errors
///
/// Returns an error if the store task fails.
pub async fn list(store: &AsyncDataStore) -> Result<(), CommandError> {
    let carts = store.load_saved_carts().await?;
    for cart in &carts {
        info!(id = %cart.id, products = cart.product_count, "{}", cart.name);
    }
    info!(count = carts.len(), "Saved carts");
    Ok(())
}

/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown saved cart.
pub async fn show(store: &AsyncDataStore, id: SavedCartId) -> Result<(), CommandError> {
    let carts = store.load_saved_carts().await?;
    let record = carts
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| not_found(&id))?;

    info!(id = %record.id, "{}", record.name);
    let catalog = store.load_catalog().await?;
    log_cart(&record.to_cart(), &catalog);
    Ok(())
}

/// Save `items` as a new cart called `name`.
///
/// # Errors
///
/// Returns an error for a blank name or if the write fails.
pub async fn create(
    store: &AsyncDataStore,
    name: String,
    items: Vec<ItemArg>,
) -> Result<SavedCartId, CommandError> {
    let id = store
        .with_store(move |store| shop_with(store, &items).save_cart(&name))
        .await??;
    info!(%id, "Saved cart created");
    Ok(id)
}

/// Replace the contents of saved cart `id` with `items`.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown saved cart, or an error if
/// the write fails.
pub async fn update(
    store: &AsyncDataStore,
    id: SavedCartId,
    items: Vec<ItemArg>,
) -> Result<(), CommandError> {
    store
        .with_store(move |store| {
            if store.load_saved_carts().iter().all(|c| c.id != id) {
                return Err(not_found(&id));
            }
            shop_with(store, &items).update_saved_cart(&id)?;
            info!(%id, "Saved cart updated");
            Ok(())
        })
        .await?
}

/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown saved cart, or an error if
/// the write fails.
pub async fn delete(store: &AsyncDataStore, id: SavedCartId) -> Result<(), CommandError> {
    store
        .with_store(move |store| {
            if store.load_saved_carts().iter().all(|c| c.id != id) {
                return Err(not_found(&id));
            }
            store.delete_saved_cart(&id)?;
            info!(%id, "Saved cart deleted");
            Ok(())
        })
        .await?
}

/// Log the share message for saved cart `id`.
///
/// # Errors
///
/// Returns `CommandError::NotFound` for an unknown saved cart.
pub async fn share(store: &AsyncDataStore, id: SavedCartId) -> Result<(), CommandError> {
    let carts = store.load_saved_carts().await?;
    let record = carts
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| not_found(&id))?;
    let catalog = store.load_catalog().await?;

    info!("\n{}", share_text(&record.name, &record.to_cart(), &catalog));
    Ok(())
}

fn not_found(id: &SavedCartId) -> CommandError {
    CommandError::NotFound {
        kind: "saved cart",
        id: id.to_string(),
    }
}
