//! Typed wrappers around [`StoreHandle`](crate::framework::StoreHandle), one per container.

pub mod account_client;
pub mod cart_client;
pub mod review_client;
pub mod traits;
pub mod wishlist_client;

pub use account_client::*;
pub use cart_client::*;
pub use review_client::*;
pub use traits::*;
pub use wishlist_client::*;
