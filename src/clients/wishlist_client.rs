use super::traits::StoreClient;
use crate::framework::{StoreHandle, StoreRequest};
use crate::model::{resolve_products, Product, ProductId};
use crate::store::StoreError;
use tracing::{debug, instrument};

/// Client for the wishlist container.
#[derive(Clone)]
pub struct WishlistClient {
    handle: StoreHandle,
}

impl WishlistClient {
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    #[instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::AddToWishlist {
                product_id,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, product_id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::RemoveFromWishlist {
                product_id,
                respond_to,
            })
            .await?
    }

    /// Moves the product to the cart as a new line of quantity 1.
    #[instrument(skip(self))]
    pub async fn move_to_cart(&self, product_id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::MoveWishToCart {
                product_id,
                respond_to,
            })
            .await?
    }

    /// Wishlisted products resolved against the catalog.
    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        let snapshot = self.snapshot().await?;
        Ok(resolve_products(&snapshot.wishlist))
    }
}

impl StoreClient for WishlistClient {
    fn handle(&self) -> &StoreHandle {
        &self.handle
    }
}
