//! # Cart Client
//!
//! High-level API for cart mutations and checkout.

use super::traits::StoreClient;
use crate::framework::{StoreHandle, StoreRequest};
use crate::model::{CartView, ProductId, Receipt};
use crate::store::StoreError;
use tracing::{debug, instrument};

/// Client for the cart container.
#[derive(Clone)]
pub struct CartClient {
    handle: StoreHandle,
}

impl CartClient {
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    #[instrument(skip(self))]
    pub async fn add(&self, product_id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::AddToCart {
                product_id,
                respond_to,
            })
            .await?
    }

    /// Sets a quantity from the raw text of the quantity field.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, product_id: ProductId, value: &str) -> Result<(), StoreError> {
        debug!("Sending request");
        let value = value.to_string();
        self.handle
            .call(|respond_to| StoreRequest::SetCartQuantity {
                product_id,
                value,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, product_id: ProductId) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::RemoveFromCart {
                product_id,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::ClearCart { respond_to })
            .await?
    }

    /// Places the order and empties the cart.
    ///
    /// Fails with [`StoreError::EmptyCart`] when there is nothing to buy.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<Receipt, StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::Checkout { respond_to })
            .await?
    }

    /// Current lines with total and item count.
    pub async fn view(&self) -> Result<CartView, StoreError> {
        let snapshot = self.snapshot().await?;
        Ok(CartView::from_lines(snapshot.cart))
    }
}

impl StoreClient for CartClient {
    fn handle(&self) -> &StoreHandle {
        &self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_handle, next_request};
    use crate::model::CartLine;
    use crate::store::StoreSnapshot;

    #[tokio::test]
    async fn test_set_quantity_forwards_raw_value() {
        let (handle, mut receiver) = create_mock_handle(4);
        let cart = CartClient::new(handle);

        let task = tokio::spawn(async move { cart.set_quantity(ProductId::new("p2"), "7").await });

        match next_request(&mut receiver).await {
            Some(StoreRequest::SetCartQuantity {
                product_id,
                value,
                respond_to,
            }) => {
                assert_eq!(product_id, ProductId::new("p2"));
                assert_eq!(value, "7");
                respond_to.send(Ok(())).unwrap();
            }
            other => panic!("unexpected request: {other:?}"),
        }

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_view_derives_totals_from_snapshot() {
        let (handle, mut receiver) = create_mock_handle(4);
        let cart = CartClient::new(handle);

        let task = tokio::spawn(async move { cart.view().await });

        match next_request(&mut receiver).await {
            Some(StoreRequest::Snapshot { respond_to }) => {
                let snapshot = StoreSnapshot {
                    cart: vec![CartLine {
                        product_id: ProductId::new("p5"),
                        name: "Gaming Mouse".into(),
                        price: 1499,
                        quantity: 2,
                    }],
                    ..StoreSnapshot::default()
                };
                respond_to.send(snapshot).unwrap();
            }
            other => panic!("unexpected request: {other:?}"),
        }

        let view = task.await.unwrap().unwrap();
        assert_eq!(view.total, 2998);
        assert_eq!(view.count, 2);
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (handle, receiver) = create_mock_handle(4);
        drop(receiver);
        let cart = CartClient::new(handle);

        let result = cart.add(ProductId::new("p1")).await;
        assert!(matches!(result, Err(StoreError::ActorCommunication(msg)) if msg == "Actor closed"));
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_communication_error() {
        let (handle, mut receiver) = create_mock_handle(4);
        let cart = CartClient::new(handle);

        let task = tokio::spawn(async move { cart.clear().await });
        let request = next_request(&mut receiver).await.unwrap();
        drop(request);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(StoreError::ActorCommunication(_))));
    }
}
