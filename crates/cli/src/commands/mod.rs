//! Subcommand implementations.

pub mod catalog;
pub mod purchase;
pub mod saved;
pub mod seed;

use apa_core::{Cart, Product, ProductId};
use apa_store::{ConfigError, DataStore, ShopError, ShopState, StoreError};
use thiserror::Error;
use tracing::info;

use crate::items::ItemArg;

/// Errors surfaced to the user by `apa`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

/// Build a session over `store` whose cart holds `items`.
fn shop_with(store: &DataStore, items: &[ItemArg]) -> ShopState {
    let mut shop = ShopState::new(store.clone());
    for item in items {
        shop.add_to_cart_by(&item.product_id, i64::from(item.quantity));
    }
    shop
}

/// Log each line of `cart` with its catalog name and price, then the subtotal.
fn log_cart(cart: &Cart, catalog: &[Product]) {
    for (product_id, quantity) in cart.iter() {
        match find(catalog, product_id) {
            Some(product) => info!(
                id = %product_id,
                quantity = quantity.get(),
                price = %product.price,
                "{}",
                product.name
            ),
            None => info!(id = %product_id, quantity = quantity.get(), "(not in catalog)"),
        }
    }
    info!(units = cart.count(), subtotal = %cart.subtotal(catalog), "Cart total");
}

fn find<'a>(catalog: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    catalog.iter().find(|p| &p.id == id)
}
