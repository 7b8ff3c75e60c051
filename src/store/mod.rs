//! # Persisted Store
//!
//! [`Store`] holds the shopper-owned containers (cart, wishlist, reviews,
//! registered users) and the optional [`Session`], mirrored to a
//! [`KeyValueStorage`] backend.
//!
//! ## Persistence Rules
//!
//! - Every mutation serializes the containers it touched and overwrites their
//!   keys before returning. A caller that re-reads after a successful call
//!   always sees what storage holds.
//! - There is no grouping across keys: `move_wish_to_cart` writes the cart and
//!   then the wishlist, as two independent writes.
//! - Loading never fails. A key that is missing, unreadable or not valid JSON
//!   for its container loads as empty, and the other keys are unaffected.
//!
//! ## Input Handling
//!
//! Malformed mutation input (an unknown product, a cart line that does not
//! exist) is a silent no-op. Form validation failures come back as a
//! [`StoreError`] naming the rule that failed.
//!
//! Operations are grouped by container:
//! [`cart`] · [`wishlist`] · [`reviews`] · [`accounts`]

pub mod accounts;
pub mod cart;
pub mod error;
pub mod reviews;
pub mod validation;
pub mod wishlist;

pub use error::*;

use crate::model::{CartLine, ProductId, Review, Session, UserAccount};
use crate::storage::{keys, KeyValueStorage, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything the presentation layer renders, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreSnapshot {
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<ProductId>,
    pub reviews: Vec<Review>,
    pub session: Option<Session>,
}

/// In-memory mirror of the persisted containers.
pub struct Store<S: KeyValueStorage> {
    storage: S,
    cart: Vec<CartLine>,
    wishlist: Vec<ProductId>,
    reviews: Vec<Review>,
    users: Vec<UserAccount>,
    session: Option<Session>,
}

impl<S: KeyValueStorage> Store<S> {
    /// Loads every container from `storage`, falling back to empty per key.
    pub fn load(storage: S) -> Self {
        let store = Self {
            cart: read_container(&storage, keys::CART),
            wishlist: read_container(&storage, keys::WISHLIST),
            reviews: read_container(&storage, keys::REVIEWS),
            users: read_container(&storage, keys::USERS),
            session: read_container(&storage, keys::SESSION),
            storage,
        };
        info!(
            cart = store.cart.len(),
            wishlist = store.wishlist.len(),
            reviews = store.reviews.len(),
            users = store.users.len(),
            logged_in = store.session.is_some(),
            "Store loaded"
        );
        store
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    /// Reviews, newest first.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            cart: self.cart.clone(),
            wishlist: self.wishlist.clone(),
            reviews: self.reviews.clone(),
            session: self.session.clone(),
        }
    }

    fn persist_cart(&mut self) -> Result<(), StoreError> {
        write_container(&mut self.storage, keys::CART, &self.cart)
    }

    fn persist_wishlist(&mut self) -> Result<(), StoreError> {
        write_container(&mut self.storage, keys::WISHLIST, &self.wishlist)
    }

    fn persist_reviews(&mut self) -> Result<(), StoreError> {
        write_container(&mut self.storage, keys::REVIEWS, &self.reviews)
    }

    fn persist_users(&mut self) -> Result<(), StoreError> {
        write_container(&mut self.storage, keys::USERS, &self.users)
    }

    fn persist_session(&mut self) -> Result<(), StoreError> {
        write_container(&mut self.storage, keys::SESSION, &self.session)
    }
}

fn read_container<S, T>(storage: &S, key: &str) -> T
where
    S: KeyValueStorage,
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "Storage read failed, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Malformed container, starting empty");
            T::default()
        }
    }
}

fn write_container<S, T>(storage: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStorage,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)?;
    debug!(key, bytes = json.len(), "Persisted");
    Ok(())
}
