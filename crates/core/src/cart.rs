//! Live shopping cart and its update rules.
//!
//! A [`Cart`] maps product IDs to quantities. Every operation returns a new
//! cart and leaves the receiver untouched, so a state container can swap the
//! current value on each UI action.
//!
//! Quantities never drop below 1 through [`Cart::add`] or
//! [`Cart::update_quantity`]. Removing a line is always the explicit
//! [`Cart::remove`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::catalog::Product;
use crate::document::CartLineRecord;
use crate::types::{ProductId, Quantity};

/// Product ID to quantity mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: BTreeMap<ProductId, Quantity>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from document lines. Later duplicates win.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLineRecord>) -> Self {
        lines
            .into_iter()
            .map(|line| (line.product_id, line.quantity))
            .collect()
    }

    /// The cart as document lines, ordered by product ID.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLineRecord> {
        self.lines
            .iter()
            .map(|(product_id, quantity)| CartLineRecord {
                product_id: product_id.clone(),
                quantity: *quantity,
            })
            .collect()
    }

    /// Quantity of `product_id`, if it is in the cart.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<Quantity> {
        self.lines.get(product_id).copied()
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.lines.contains_key(product_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, Quantity)> {
        self.lines.iter().map(|(id, quantity)| (id, *quantity))
    }

    /// Total units across all lines (the cart badge).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.values().map(|q| u64::from(q.get())).sum()
    }

    /// Add `delta` units of `product_id`.
    ///
    /// The result is `max(1, current + delta)` where an absent product counts
    /// as 0. A negative delta can lower a quantity but never removes the line.
    #[must_use]
    pub fn add(&self, product_id: &ProductId, delta: i64) -> Self {
        let current = self.get(product_id).map_or(0, i64::from);
        self.with_line(product_id, Quantity::floored(current.saturating_add(delta)))
    }

    /// Add a single unit of `product_id`.
    #[must_use]
    pub fn add_one(&self, product_id: &ProductId) -> Self {
        self.add(product_id, 1)
    }

    /// Set the quantity of `product_id` to `max(1, quantity)`.
    ///
    /// Stepping a quantity of 1 down through here is a no-op.
    #[must_use]
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> Self {
        self.with_line(product_id, Quantity::floored(quantity))
    }

    /// Drop the line for `product_id`, if any.
    #[must_use]
    pub fn remove(&self, product_id: &ProductId) -> Self {
        let mut next = self.clone();
        next.lines.remove(product_id);
        next
    }

    /// Apply a loaded saved cart or last purchase on top of this cart.
    ///
    /// Quantities from `loaded` overwrite existing ones; they are not added.
    #[must_use]
    pub fn merge_loaded(&self, loaded: &Self) -> Self {
        let mut next = self.clone();
        next.lines
            .extend(loaded.lines.iter().map(|(id, quantity)| (id.clone(), *quantity)));
        next
    }

    /// Sum of `price * quantity` over lines whose product is in `catalog`
    /// and whose price parses.
    #[must_use]
    pub fn subtotal(&self, catalog: &[Product]) -> Decimal {
        catalog
            .iter()
            .filter_map(|product| {
                let quantity = self.get(&product.id)?;
                let amount = product.price.amount()?;
                Some(amount * Decimal::from(quantity.get()))
            })
            .sum()
    }

    fn with_line(&self, product_id: &ProductId, quantity: Quantity) -> Self {
        let mut next = self.clone();
        next.lines.insert(product_id.clone(), quantity);
        next
    }
}

impl FromIterator<(ProductId, Quantity)> for Cart {
    fn from_iter<I: IntoIterator<Item = (ProductId, Quantity)>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
