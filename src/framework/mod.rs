//! Actor plumbing that gives the store a single owner.
//!
//! # Main Components
//!
//! - [`StoreActor`] - Owns the [`Store`](crate::store::Store) and processes requests sequentially
//! - [`StoreHandle`] - Cloneable sender used by the typed clients
//! - [`StoreRequest`] - One message variant per store operation
//! - [`FrameworkError`] - Channel failures
//!
//! # Testing
//!
//! See [`mock`] for testing clients without a running actor.

pub mod actor;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use error::FrameworkError;
pub use handle::StoreHandle;
pub use message::{Response, StoreRequest};
