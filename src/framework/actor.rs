//! # Store Actor
//!
//! The actor that exclusively owns the [`Store`]. It is the "server" half of the
//! actor pair; [`StoreHandle`] is the "client" half.
//!
//! **Concurrency Model**:
//! Any number of cloned clients may send requests, but the actor handles them
//! one at a time in arrival order. Each store operation (including its storage
//! writes) runs to completion before the next request is read, so the store
//! needs no `Mutex` and never observes a half-applied mutation.

use super::handle::StoreHandle;
use super::message::StoreRequest;
use crate::storage::KeyValueStorage;
use crate::store::Store;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct StoreActor<S: KeyValueStorage> {
    receiver: mpsc::Receiver<StoreRequest>,
    store: Store<S>,
}

impl<S: KeyValueStorage + 'static> StoreActor<S> {
    /// Creates the actor and the handle used to reach it.
    ///
    /// # Arguments
    ///
    /// * `store` - The loaded store the actor will own.
    /// * `buffer_size` - Channel capacity. When full, client calls wait for space.
    pub fn new(store: Store<S>, buffer_size: usize) -> (Self, StoreHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreHandle::new(sender))
    }

    /// Runs the event loop until every handle has been dropped.
    pub async fn run(mut self) {
        info!("Store actor started");

        while let Some(request) = self.receiver.recv().await {
            debug!(request = request.name(), "Handling request");
            self.handle(request);
        }

        info!(
            cart = self.store.cart().len(),
            wishlist = self.store.wishlist().len(),
            reviews = self.store.reviews().len(),
            users = self.store.users().len(),
            "Store actor shutdown"
        );
    }

    // A dropped responder means the caller gave up; the mutation still stands.
    fn handle(&mut self, request: StoreRequest) {
        let store = &mut self.store;
        match request {
            StoreRequest::AddToCart {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(store.add_to_cart(&product_id));
            }
            StoreRequest::SetCartQuantity {
                product_id,
                value,
                respond_to,
            } => {
                let _ = respond_to.send(store.set_cart_quantity(&product_id, &value));
            }
            StoreRequest::RemoveFromCart {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(store.remove_from_cart(&product_id));
            }
            StoreRequest::ClearCart { respond_to } => {
                let _ = respond_to.send(store.clear_cart());
            }
            StoreRequest::Checkout { respond_to } => {
                let _ = respond_to.send(store.checkout());
            }
            StoreRequest::AddToWishlist {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(store.add_to_wishlist(&product_id));
            }
            StoreRequest::RemoveFromWishlist {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(store.remove_from_wishlist(&product_id));
            }
            StoreRequest::MoveWishToCart {
                product_id,
                respond_to,
            } => {
                let _ = respond_to.send(store.move_wish_to_cart(&product_id));
            }
            StoreRequest::SubmitReview { review, respond_to } => {
                let _ = respond_to.send(store.submit_review(review));
            }
            StoreRequest::Register {
                registration,
                respond_to,
            } => {
                let _ = respond_to.send(store.register(registration));
            }
            StoreRequest::Login {
                credentials,
                respond_to,
            } => {
                let _ = respond_to.send(store.login(credentials));
            }
            StoreRequest::Logout { respond_to } => {
                let _ = respond_to.send(store.logout());
            }
            StoreRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(store.snapshot());
            }
        }
    }
}
