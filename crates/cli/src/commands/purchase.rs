//! Purchases.

use apa_store::AsyncDataStore;
use tracing::info;

use super::{CommandError, log_cart, shop_with};
use crate::items::ItemArg;

/// Show the last confirmed purchase.
///
/// # Errors
///
/// Returns an error if the store task fails.
pub async fn last(store: &AsyncDataStore) -> Result<(), CommandError> {
    let cart = store.load_last_purchase().await?;
    if cart.is_empty() {
        info!("No purchase recorded yet");
        return Ok(());
    }
    let catalog = store.load_catalog().await?;
    log_cart(&cart, &catalog);
    Ok(())
}

/// Record `items` as the last purchase.
///
/// # Errors
///
/// Returns an error if the write fails.
pub async fn confirm(store: &AsyncDataStore, items: Vec<ItemArg>) -> Result<(), CommandError> {
    let units = store
        .with_store(move |store| {
            let mut shop = shop_with(store, &items);
            let units = shop.cart_count();
            shop.confirm_purchase().map(|()| units)
        })
        .await??;
    info!(units, "Purchase saved");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use apa_core::ProductId;
    use apa_store::DataStore;
    use tempfile::TempDir;

    use super::*;
    use crate::items::parse_item;

    #[tokio::test]
    async fn test_confirm_replaces_last_purchase() {
        let dir = TempDir::new().unwrap();
        let store = AsyncDataStore::new(DataStore::new(dir.path().join("app_data.json")));

        let items = vec![parse_item("7=2").unwrap(), parse_item("1").unwrap()];
        confirm(&store, items).await.unwrap();

        let last = store.load_last_purchase().await.unwrap();
        assert_eq!(last.get(&ProductId::new("7")).map(apa_core::Quantity::get), Some(2));
        assert_eq!(last.count(), 3);
    }
}
