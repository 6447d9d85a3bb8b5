//! Integration tests for cart update rules.
//!
//! These run whole shopping sessions through `ShopState` and check the
//! quantities a user would see.

#![allow(clippy::unwrap_used)]

use apa_core::{Cart, ProductId, Quantity};
use apa_integration_tests::TestDir;
use apa_store::{ShopError, ShopState};

fn pid(id: &str) -> ProductId {
    ProductId::new(id)
}

fn qty(cart: &Cart, id: &str) -> Option<u32> {
    cart.get(&pid(id)).map(Quantity::get)
}

// =============================================================================
// Reducer Properties
// =============================================================================

#[test]
fn test_every_quantity_stays_positive() {
    let mut cart = Cart::new();
    let deltas = [3, -10, 0, 5, -1, i64::MIN, 2];
    for delta in deltas {
        cart = cart.add(&pid("1"), delta);
        cart = cart.update_quantity(&pid("2"), delta);
        assert!(cart.iter().all(|(_, q)| q.get() >= 1));
    }
}

#[test]
fn test_add_accumulates_then_floors() {
    let cart = Cart::new().add(&pid("x"), 2).add(&pid("x"), 3);
    assert_eq!(qty(&cart, "x"), Some(5));

    let cart = cart.add(&pid("x"), -9);
    assert_eq!(qty(&cart, "x"), Some(1));

    let cart = Cart::new().add(&pid("y"), -4);
    assert_eq!(qty(&cart, "y"), Some(1));
}

#[test]
fn test_update_quantity_creates_or_overwrites() {
    let cart = Cart::new().update_quantity(&pid("a"), 7);
    assert_eq!(qty(&cart, "a"), Some(7));

    let cart = cart.update_quantity(&pid("a"), 2);
    assert_eq!(qty(&cart, "a"), Some(2));
}

#[test]
fn test_remove_is_idempotent() {
    let cart = Cart::new().add_one(&pid("a"));
    let once = cart.remove(&pid("a"));
    let twice = once.remove(&pid("a"));
    assert!(once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_merge_overwrites_and_keeps_others() {
    let current = Cart::new().update_quantity(&pid("A"), 5).add_one(&pid("B"));
    let loaded = Cart::new().update_quantity(&pid("A"), 3).update_quantity(&pid("C"), 2);

    let merged = current.merge_loaded(&loaded);
    assert_eq!(qty(&merged, "A"), Some(3));
    assert_eq!(qty(&merged, "B"), Some(1));
    assert_eq!(qty(&merged, "C"), Some(2));
    assert_eq!(merged.count(), 6);
}

#[test]
fn test_updates_leave_original_untouched() {
    let original = Cart::new().add(&pid("a"), 2);
    let _ = original.add(&pid("a"), 5);
    let _ = original.remove(&pid("a"));
    assert_eq!(qty(&original, "a"), Some(2));
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_session_save_reload_and_purchase() {
    let dir = TestDir::new();
    let mut shop = ShopState::new(dir.store());

    shop.add_to_cart(&pid("1"));
    shop.add_to_cart_by(&pid("3"), 4);
    let id = shop.save_cart("Fin de semana").unwrap();

    shop.clear_cart();
    assert_eq!(shop.cart_count(), 0);

    shop.load_saved_cart(&id);
    assert_eq!(shop.cart_count(), 5);

    shop.confirm_purchase().unwrap();
    assert!(shop.cart().is_empty());

    shop.repeat_last_purchase();
    assert_eq!(qty(shop.cart(), "3"), Some(4));
}

#[test]
fn test_loading_unknown_saved_cart_changes_nothing() {
    let dir = TestDir::new();
    let mut shop = ShopState::new(dir.store());
    shop.add_to_cart(&pid("2"));
    let before = shop.cart().clone();

    shop.load_saved_cart(&"999".into());
    assert_eq!(*shop.cart(), before);
}

#[test]
fn test_blank_name_is_rejected_without_writing() {
    let dir = TestDir::new();
    let mut shop = ShopState::new(dir.store());
    let before = shop.store().load_saved_carts();

    shop.add_to_cart(&pid("2"));
    assert!(matches!(shop.save_cart(" \t"), Err(ShopError::BlankName)));
    assert_eq!(shop.store().load_saved_carts(), before);
}
