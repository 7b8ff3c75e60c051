use minicommerce::lifecycle::StorefrontSystem;
use minicommerce::model::{Credentials, ProductId, Registration, ReviewCreate};
use minicommerce::storage::{keys, FileStorage, KeyValueStorage};
use minicommerce::store::Store;

/// State written by one system is reproduced by a fresh load of the same directory.
#[tokio::test]
async fn test_reload_restores_every_container() {
    let dir = tempfile::tempdir().expect("tempdir");

    let storage = FileStorage::open(dir.path()).expect("open storage");
    let system = StorefrontSystem::start(Store::load(storage), 8);

    system.cart.add(ProductId::new("p5")).await.unwrap();
    system
        .cart
        .set_quantity(ProductId::new("p5"), "3")
        .await
        .unwrap();
    system.wishlist.add(ProductId::new("p4")).await.unwrap();
    system
        .reviews
        .submit(ReviewCreate::new("Bob", "4", "Great product"))
        .await
        .unwrap();
    system
        .accounts
        .register(Registration::new("alice", "a@b.com", "secret1", "secret1"))
        .await
        .unwrap();
    system
        .accounts
        .login(Credentials::new("alice", "secret1"))
        .await
        .unwrap();
    system.shutdown().await.expect("Failed to shutdown system");

    let reloaded = Store::load(FileStorage::open(dir.path()).expect("reopen storage"));
    assert_eq!(reloaded.cart().len(), 1);
    assert_eq!(reloaded.cart()[0].quantity, 3);
    assert_eq!(reloaded.wishlist(), &[ProductId::new("p4")]);
    assert_eq!(reloaded.reviews().len(), 1);
    assert_eq!(reloaded.reviews()[0].name, "Bob");
    assert_eq!(reloaded.users().len(), 1);
    assert_eq!(
        reloaded.session().map(|s| s.username.as_str()),
        Some("alice")
    );
}

/// Each container lives under its own key in the storage layout.
#[tokio::test]
async fn test_files_use_storage_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open storage");
    let system = StorefrontSystem::start(Store::load(storage), 8);

    system.cart.add(ProductId::new("p3")).await.unwrap();
    system.accounts.logout().await.unwrap();
    system.shutdown().await.unwrap();

    let storage = FileStorage::open(dir.path()).unwrap();
    let cart = storage.get(keys::CART).unwrap().expect("cart written");
    let lines: serde_json::Value = serde_json::from_str(&cart).unwrap();
    assert_eq!(
        lines,
        serde_json::json!([{ "id": "p3", "name": "Bluetooth Speaker", "price": 899, "qty": 1 }])
    );
    assert_eq!(storage.get(keys::SESSION).unwrap().as_deref(), Some("null"));
    assert_eq!(storage.get(keys::WISHLIST).unwrap(), None);
}

/// A corrupt container falls back to empty without disturbing the others.
#[test]
fn test_corrupt_file_falls_back_to_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::open(dir.path()).unwrap();
    storage.set(keys::CART, "{not json").unwrap();
    storage.set(keys::WISHLIST, r#"["p1","p2"]"#).unwrap();

    let store = Store::load(storage);
    assert!(store.cart().is_empty());
    assert_eq!(store.wishlist().len(), 2);
}
