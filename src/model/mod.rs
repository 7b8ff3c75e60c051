//! Pure data structures held by the [`Store`](crate::store::Store).
//!
//! Every type here except [`Product`] is persisted, so the serde field names
//! match the storage layout rather than the Rust field names.

pub mod account;
pub mod cart;
pub mod product;
pub mod review;

pub use account::*;
pub use cart::*;
pub use product::*;
pub use review::*;
