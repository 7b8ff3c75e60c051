//! # Durable Key-Value Storage
//!
//! The store persists each container as one JSON string under a fixed key.
//! This module defines the [`KeyValueStorage`] seam and its two backends:
//!
//! - [`MemoryStorage`] - a `HashMap`, for tests and throwaway sessions
//! - [`FileStorage`] - one `<key>.json` file per key inside a data directory
//!
//! Backends only move strings around. Serialization and the fallback rules for
//! malformed values live in [`crate::store`].

pub mod error;
pub mod file;
pub mod memory;

pub use error::*;
pub use file::*;
pub use memory::*;

/// Storage keys, one per persisted container.
pub mod keys {
    pub const CART: &str = "cart";
    pub const WISHLIST: &str = "wishlist";
    pub const REVIEWS: &str = "reviews";
    pub const USERS: &str = "users";
    pub const SESSION: &str = "session";
}

/// A synchronous string key-value store.
///
/// Every `set` overwrites the whole value for the key.
pub trait KeyValueStorage: Send {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Inserts or overwrites the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
