//! Plain-text cart summaries for sharing through messaging apps.

use core::fmt::Write as _;

use crate::cart::Cart;
use crate::catalog::Product;

/// Footer appended to every shared cart.
pub const SHARE_FOOTER: &str = "Compartido desde APA Supermercados";

/// Render `cart` as a shareable message titled `name`.
///
/// Lines follow the cart's item order. Lines whose product is not in
/// `catalog` are skipped.
///
/// ```rust
/// # use apa_core::{Cart, Price, Product, ProductId, share_text};
/// let catalog = vec![Product::new(ProductId::new("1"), "Arroz 1kg", Price::new("1.250,00"))];
/// let cart = Cart::new().add(&ProductId::new("1"), 2);
/// let text = share_text("Semanal", &cart, &catalog);
/// assert!(text.contains("• Arroz 1kg x2 - 1.250,00"));
/// ```
#[must_use]
pub fn share_text(name: &str, cart: &Cart, catalog: &[Product]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "🛒 Carrito: {name}");
    text.push('\n');
    text.push_str("Productos:\n");

    for (product_id, quantity) in cart.iter() {
        if let Some(product) = catalog.iter().find(|p| &p.id == product_id) {
            let _ = writeln!(text, "• {} x{} - {}", product.name, quantity, product.price);
        }
    }

    text.push('\n');
    text.push_str(SHARE_FOOTER);
    text.push('\n');
    text
}
