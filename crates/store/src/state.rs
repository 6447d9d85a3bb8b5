//! Shopping session state.
//!
//! [`ShopState`] owns the live cart and the store, and exposes the only
//! entry points through which UI actions change either one.

use apa_core::{Cart, Product, ProductId, SavedCartId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument};

use crate::error::StoreError;
use crate::store::DataStore;

/// Errors from checked cart commands.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A saved cart needs a non-blank name.
    #[error("cart name cannot be blank")]
    BlankName,

    /// The operation needs at least one product in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Persisting the change failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The live cart plus the store it is saved to.
#[derive(Debug, Clone)]
pub struct ShopState {
    store: DataStore,
    cart: Cart,
}

impl ShopState {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            cart: Cart::new(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &DataStore {
        &self.store
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total units in the cart, for the badge.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Cart subtotal priced against `catalog`.
    #[must_use]
    pub fn subtotal(&self, catalog: &[Product]) -> Decimal {
        self.cart.subtotal(catalog)
    }

    // =========================================================================
    // Cart actions
    // =========================================================================

    /// Add one unit of `product_id`.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> &Cart {
        self.add_to_cart_by(product_id, 1)
    }

    /// Add `delta` units of `product_id`, never going below 1.
    pub fn add_to_cart_by(&mut self, product_id: &ProductId, delta: i64) -> &Cart {
        self.cart = self.cart.add(product_id, delta);
        &self.cart
    }

    /// Set the quantity of `product_id`, never going below 1.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> &Cart {
        self.cart = self.cart.update_quantity(product_id, quantity);
        &self.cart
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> &Cart {
        self.cart = self.cart.remove(product_id);
        &self.cart
    }

    pub fn clear_cart(&mut self) {
        self.cart = Cart::new();
    }

    /// Overlay saved cart `id` onto the current cart.
    ///
    /// An unknown ID leaves the cart unchanged.
    pub fn load_saved_cart(&mut self, id: &SavedCartId) -> &Cart {
        let loaded = self.store.load_saved_cart(id);
        self.cart = self.cart.merge_loaded(&loaded);
        &self.cart
    }

    /// Overlay the last purchase onto the current cart.
    pub fn repeat_last_purchase(&mut self) -> &Cart {
        let loaded = self.store.load_last_purchase();
        self.cart = self.cart.merge_loaded(&loaded);
        &self.cart
    }

    // =========================================================================
    // Checkpoints
    // =========================================================================

    /// Save the current cart under `name` and return the new saved cart ID.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::BlankName` or `ShopError::EmptyCart` without
    /// touching the store, or `ShopError::Store` if the write fails.
    #[instrument(skip(self))]
    pub fn save_cart(&self, name: &str) -> Result<SavedCartId, ShopError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ShopError::BlankName);
        }
        if self.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }
        Ok(self.store.save_cart(name, &self.cart)?)
    }

    /// Replace saved cart `id` with the current cart.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::EmptyCart` or `ShopError::Store`.
    #[instrument(skip(self))]
    pub fn update_saved_cart(&self, id: &SavedCartId) -> Result<(), ShopError> {
        if self.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }
        Ok(self.store.update_saved_cart(id, &self.cart)?)
    }

    /// Record the current cart as the last purchase and empty it.
    ///
    /// The cart is kept if the write fails.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::EmptyCart` or `ShopError::Store`.
    #[instrument(skip(self))]
    pub fn confirm_purchase(&mut self) -> Result<(), ShopError> {
        if self.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }
        self.store.save_last_purchase(&self.cart)?;
        info!(units = self.cart.count(), "Purchase confirmed");
        self.clear_cart();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use apa_core::Quantity;

    use super::*;
    use tempfile::TempDir;

    fn pid(id: &str) -> ProductId {
        ProductId::new(id)
    }

    fn shop(dir: &TempDir) -> ShopState {
        ShopState::new(DataStore::new(dir.path().join("app_data.json")))
    }

    #[test]
    fn test_actions_update_cart_and_count() {
        let dir = TempDir::new().unwrap();
        let mut shop = shop(&dir);
        assert_eq!(shop.cart_count(), 0);

        shop.add_to_cart(&pid("1"));
        shop.add_to_cart_by(&pid("1"), 2);
        shop.add_to_cart(&pid("2"));
        assert_eq!(shop.cart_count(), 4);

        shop.update_quantity(&pid("1"), 0);
        assert_eq!(shop.cart().get(&pid("1")), Some(Quantity::ONE));

        shop.remove_from_cart(&pid("2"));
        assert_eq!(shop.cart_count(), 1);
    }

    #[test]
    fn test_save_cart_validation() {
        let dir = TempDir::new().unwrap();
        let mut shop = shop(&dir);

        assert!(matches!(shop.save_cart("Semanal"), Err(ShopError::EmptyCart)));

        shop.add_to_cart(&pid("1"));
        assert!(matches!(shop.save_cart("   "), Err(ShopError::BlankName)));
        assert!(shop.store().load_saved_carts().iter().all(|c| c.name != "   "));

        let id = shop.save_cart("  Semanal ").unwrap();
        let saved = shop.store().load_saved_carts();
        let record = saved.iter().find(|c| c.id == id).unwrap();
        assert_eq!(record.name, "Semanal");
    }

    #[test]
    fn test_load_saved_cart_overwrites_quantities() {
        let dir = TempDir::new().unwrap();
        let mut shop = shop(&dir);

        shop.update_quantity(&pid("A"), 3);
        let id = shop.save_cart("Guardado").unwrap();

        shop.clear_cart();
        shop.update_quantity(&pid("A"), 5);
        shop.add_to_cart(&pid("B"));
        shop.load_saved_cart(&id);

        assert_eq!(shop.cart().get(&pid("A")).map(Quantity::get), Some(3));
        assert_eq!(shop.cart().get(&pid("B")).map(Quantity::get), Some(1));
    }

    #[test]
    fn test_confirm_purchase_then_repeat() {
        let dir = TempDir::new().unwrap();
        let mut shop = shop(&dir);

        assert!(matches!(shop.confirm_purchase(), Err(ShopError::EmptyCart)));

        shop.add_to_cart_by(&pid("7"), 2);
        shop.confirm_purchase().unwrap();
        assert!(shop.cart().is_empty());

        shop.repeat_last_purchase();
        assert_eq!(shop.cart().get(&pid("7")).map(Quantity::get), Some(2));
    }

    #[test]
    fn test_confirm_purchase_keeps_cart_on_write_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();
        let mut shop = ShopState::new(DataStore::new(blocker.join("app_data.json")));

        shop.add_to_cart(&pid("1"));
        assert!(matches!(shop.confirm_purchase(), Err(ShopError::Store(_))));
        assert_eq!(shop.cart_count(), 1);
    }

    #[test]
    fn test_update_saved_cart_from_current() {
        let dir = TempDir::new().unwrap();
        let mut shop = shop(&dir);
        shop.add_to_cart(&pid("1"));
        let id = shop.save_cart("Editable").unwrap();

        shop.update_quantity(&pid("1"), 6);
        shop.update_saved_cart(&id).unwrap();
        assert_eq!(shop.store().load_saved_cart(&id), *shop.cart());

        shop.clear_cart();
        assert!(matches!(shop.update_saved_cart(&id), Err(ShopError::EmptyCart)));
    }
}
