//! Persisted app data document.
//!
//! These records mirror the on-disk JSON exactly:
//!
//! ```json
//! {
//!   "products": [{ "id": "1", "name": "Arroz 1kg", "price": "1.250,00",
//!                  "imageRes": "arroz", "imageUrl": null }],
//!   "savedCarts": [{ "id": "1", "name": "Semanal", "productCount": 3,
//!                    "items": [{ "productId": "1", "quantity": 3 }] }],
//!   "lastPurchase": { "items": [{ "productId": "1", "quantity": 2 }] }
//! }
//! ```
//!
//! The whole [`Document`] is the unit of persistence.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::{Price, ProductId, Quantity, SavedCartId};

/// A catalog entry as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Name of a bundled image, resolved at load time.
    #[serde(default)]
    pub image_res: Option<String>,
    /// Remote image location.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One product and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineRecord {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// A named, persisted snapshot of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCartRecord {
    pub id: SavedCartId,
    pub name: String,
    /// Total units across `items`.
    pub product_count: u64,
    pub items: Vec<CartLineRecord>,
}

impl SavedCartRecord {
    /// Build a saved cart from the given cart contents.
    #[must_use]
    pub fn new(id: SavedCartId, name: impl Into<String>, cart: &Cart) -> Self {
        Self {
            id,
            name: name.into(),
            product_count: cart.count(),
            items: cart.lines(),
        }
    }

    /// Replace the items, keeping `product_count` in step.
    pub fn set_items(&mut self, cart: &Cart) {
        self.product_count = cart.count();
        self.items = cart.lines();
    }

    /// The items as a cart.
    #[must_use]
    pub fn to_cart(&self) -> Cart {
        Cart::from_lines(self.items.iter().cloned())
    }
}

/// The most recently confirmed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LastPurchaseRecord {
    pub items: Vec<CartLineRecord>,
}

/// Root aggregate of persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub saved_carts: Vec<SavedCartRecord>,
    #[serde(default)]
    pub last_purchase: Option<LastPurchaseRecord>,
}

impl Document {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or does not match the
    /// schema (including any quantity below 1).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Look up a saved cart by ID.
    #[must_use]
    pub fn saved_cart(&self, id: &SavedCartId) -> Option<&SavedCartRecord> {
        self.saved_carts.iter().find(|cart| &cart.id == id)
    }

    /// Look up a saved cart by ID for modification.
    pub fn saved_cart_mut(&mut self, id: &SavedCartId) -> Option<&mut SavedCartRecord> {
        self.saved_carts.iter_mut().find(|cart| &cart.id == id)
    }

    /// The ID the next saved cart will receive.
    #[must_use]
    pub fn next_saved_cart_id(&self) -> SavedCartId {
        SavedCartId::next_after(self.saved_carts.iter().map(|cart| &cart.id))
    }

    /// Append a saved cart with the next ID and return that ID.
    pub fn push_saved_cart(&mut self, name: impl Into<String>, cart: &Cart) -> SavedCartId {
        let id = self.next_saved_cart_id();
        self.saved_carts.push(SavedCartRecord::new(id.clone(), name, cart));
        id
    }

    /// Remove the saved cart with `id`. Returns whether one was removed.
    pub fn remove_saved_cart(&mut self, id: &SavedCartId) -> bool {
        let before = self.saved_carts.len();
        self.saved_carts.retain(|cart| &cart.id != id);
        self.saved_carts.len() != before
    }

    /// The last purchase as a cart, empty if none was recorded.
    #[must_use]
    pub fn last_purchase_cart(&self) -> Cart {
        self.last_purchase
            .as_ref()
            .map(|purchase| Cart::from_lines(purchase.items.iter().cloned()))
            .unwrap_or_default()
    }

    /// Replace the last purchase wholesale.
    pub fn set_last_purchase(&mut self, cart: &Cart) {
        self.last_purchase = Some(LastPurchaseRecord {
            items: cart.lines(),
        });
    }
}
