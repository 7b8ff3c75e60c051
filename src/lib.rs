//! # MiniCommerce
//!
//! State engine for a small storefront: a fixed product catalog, a cart, a
//! wishlist, customer reviews and a mock account system, persisted to a
//! key-value backend.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure records: [`CartLine`](model::CartLine), [`Review`](model::Review),
//! [`UserAccount`](model::UserAccount), [`Session`](model::Session) and the static
//! [`catalog`](model::catalog). Serialized field names match the storage layout.
//!
//! ### 2. The Storage ([`storage`])
//! The [`KeyValueStorage`](storage::KeyValueStorage) seam with an in-memory and a
//! directory-of-JSON-files backend.
//!
//! ### 3. The Store ([`store`])
//! [`Store`](store::Store) owns the containers and implements every mutation rule.
//! Each mutation overwrites the affected container in storage before returning.
//!
//! ### 4. The Engine ([`framework`])
//! [`StoreActor`](framework::StoreActor) gives the store a single owner task, so
//! requests from many callers are applied one at a time without locks.
//!
//! ### 5. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient), [`WishlistClient`](clients::WishlistClient),
//! [`ReviewClient`](clients::ReviewClient) and [`AccountClient`](clients::AccountClient)
//! are what a presentation layer calls. After each call it pulls fresh state and redraws.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`StorefrontSystem`](lifecycle::StorefrontSystem) starts the actor, hands out
//! the clients and shuts everything down.
//!
//! ## ⚠️ Not a Security Design
//!
//! Accounts keep plaintext passwords and login is a linear lookup. This mirrors
//! a browser demo and must not be used to protect anything.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! MINICOMMERCE_DATA_DIR=./data RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storage;
pub mod store;
