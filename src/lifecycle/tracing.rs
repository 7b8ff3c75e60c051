//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: load (container sizes), actor start and shutdown
//! - **Mutations**: one `info` line per applied change, with the product id or username
//! - **Rejections**: `warn` lines for failed validation and storage fallbacks
//! - **Requests**: client spans (`add`, `login`, ...) and payloads at `debug`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run       # one line per state change
//! RUST_LOG=debug cargo run      # plus request payloads and persisted keys
//! RUST_LOG=minicommerce::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Store loaded cart=0 wishlist=0 reviews=0 users=0 logged_in=false
//! INFO Store actor started
//! INFO add:Added to cart product_id=p1 lines=1
//! INFO register:Registered username=alice users=1
//! WARN login:Login rejected identifier=alice error=Invalid username/email or password.
//! ```
//!
//! Credentials are logged through their redacting `Debug` impls, so passwords
//! never reach the output.

/// Initializes the tracing/logging infrastructure for the application.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
