//! Integration tests for shared async store access.

#![allow(clippy::unwrap_used)]

use apa_core::{Cart, ProductId};
use apa_integration_tests::TestDir;
use apa_store::AsyncDataStore;

// =============================================================================
// Concurrent Writers
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_commands_lose_no_writes() {
    let dir = TestDir::new();
    let store = AsyncDataStore::new(dir.store());
    let before = store.load_saved_carts().await.unwrap().len();

    let mut tasks = Vec::new();
    for i in 0..6 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            let cart = Cart::new().add(&ProductId::new("1"), i + 1);
            let id = store.save_cart(format!("cart {i}"), cart).await?;
            store.save_last_purchase(Cart::new().add_one(&ProductId::new("2"))).await?;
            Ok::<_, apa_store::StoreError>(id)
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(store.load_saved_carts().await.unwrap().len(), before + 6);
    assert_eq!(store.load_last_purchase().await.unwrap().count(), 1);
}

#[tokio::test]
async fn test_reset_restores_seed() {
    let dir = TestDir::new();
    let store = AsyncDataStore::new(dir.store());
    let seeded = store.load_saved_carts().await.unwrap();

    let id = store
        .save_cart("Temporal".to_string(), Cart::new().add_one(&ProductId::new("1")))
        .await
        .unwrap();
    store.reset().await.unwrap();

    let carts = store.load_saved_carts().await.unwrap();
    assert_eq!(carts, seeded);
    assert!(store.load_saved_cart(id).await.unwrap().is_empty());
}
