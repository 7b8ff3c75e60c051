//! # Store Messages
//!
//! Requests sent from the clients to the [`StoreActor`](super::StoreActor).
//! Each variant maps to exactly one [`Store`](crate::store::Store) method and
//! carries a oneshot sender for that method's return value.

use crate::model::{Credentials, ProductId, Receipt, Registration, Review, ReviewCreate, Session};
use crate::store::{StoreError, StoreSnapshot};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

type Outcome<T = ()> = Response<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    AddToCart {
        product_id: ProductId,
        respond_to: Outcome,
    },
    SetCartQuantity {
        product_id: ProductId,
        value: String,
        respond_to: Outcome,
    },
    RemoveFromCart {
        product_id: ProductId,
        respond_to: Outcome,
    },
    ClearCart {
        respond_to: Outcome,
    },
    Checkout {
        respond_to: Outcome<Receipt>,
    },
    AddToWishlist {
        product_id: ProductId,
        respond_to: Outcome,
    },
    RemoveFromWishlist {
        product_id: ProductId,
        respond_to: Outcome,
    },
    MoveWishToCart {
        product_id: ProductId,
        respond_to: Outcome,
    },
    SubmitReview {
        review: ReviewCreate,
        respond_to: Outcome<Review>,
    },
    Register {
        registration: Registration,
        respond_to: Outcome,
    },
    Login {
        credentials: Credentials,
        respond_to: Outcome<Session>,
    },
    Logout {
        respond_to: Outcome,
    },
    Snapshot {
        respond_to: Response<StoreSnapshot>,
    },
}

impl StoreRequest {
    /// Short operation name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            StoreRequest::AddToCart { .. } => "add_to_cart",
            StoreRequest::SetCartQuantity { .. } => "set_cart_quantity",
            StoreRequest::RemoveFromCart { .. } => "remove_from_cart",
            StoreRequest::ClearCart { .. } => "clear_cart",
            StoreRequest::Checkout { .. } => "checkout",
            StoreRequest::AddToWishlist { .. } => "add_to_wishlist",
            StoreRequest::RemoveFromWishlist { .. } => "remove_from_wishlist",
            StoreRequest::MoveWishToCart { .. } => "move_wish_to_cart",
            StoreRequest::SubmitReview { .. } => "submit_review",
            StoreRequest::Register { .. } => "register",
            StoreRequest::Login { .. } => "login",
            StoreRequest::Logout { .. } => "logout",
            StoreRequest::Snapshot { .. } => "snapshot",
        }
    }
}
