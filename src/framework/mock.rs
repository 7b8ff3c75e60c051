//! # Mocking Utilities
//!
//! In client tests we don't want to spin up a full [`StoreActor`](super::StoreActor)
//! when only the *client* logic is under test (argument mapping, result
//! unwrapping, error conversion).
//!
//! [`create_mock_handle`] returns a handle whose requests arrive on a receiver
//! the test controls. The test inspects each request and answers through its
//! responder, which also makes failures easy to inject:
//!
//! ```rust
//! use minicommerce::clients::CartClient;
//! use minicommerce::framework::mock::{create_mock_handle, next_request};
//! use minicommerce::framework::StoreRequest;
//! use minicommerce::store::StoreError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (handle, mut receiver) = create_mock_handle(4);
//!     let cart = CartClient::new(handle);
//!
//!     let task = tokio::spawn(async move { cart.checkout().await });
//!
//!     match next_request(&mut receiver).await {
//!         Some(StoreRequest::Checkout { respond_to }) => {
//!             respond_to.send(Err(StoreError::EmptyCart)).unwrap();
//!         }
//!         other => panic!("unexpected request: {other:?}"),
//!     }
//!
//!     assert!(matches!(task.await.unwrap(), Err(StoreError::EmptyCart)));
//! }
//! ```
//!
//! Dropping the receiver simulates a stopped actor.

use super::handle::StoreHandle;
use super::message::StoreRequest;
use tokio::sync::mpsc;

/// Creates a handle and the receiver its requests arrive on.
pub fn create_mock_handle(buffer_size: usize) -> (StoreHandle, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreHandle::new(sender), receiver)
}

/// Waits for the next request. `None` once every handle is dropped.
pub async fn next_request(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<StoreRequest> {
    receiver.recv().await
}
