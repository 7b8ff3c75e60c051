//! # System Lifecycle
//!
//! Starting, wiring and stopping the store actor.
//!
//! 1. **Load** - [`Store::load`](crate::store::Store::load) reads every container from storage
//! 2. **Start** - [`StorefrontSystem::start`] spawns the actor and builds one client per container
//! 3. **Shutdown** - [`StorefrontSystem::shutdown`] drops the clients and awaits the actor task
//!
//! All clients share one channel, so the actor stops only after every clone
//! has been dropped. Requests already queued at that point are still served.
//!
//! Logging is set up with [`setup_tracing`].

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use self::tracing::setup_tracing;
