//! Wishlist operations.

use super::{Store, StoreError};
use crate::model::{find_product, CartLine, ProductId};
use crate::storage::KeyValueStorage;
use tracing::{debug, info};

impl<S: KeyValueStorage> Store<S> {
    /// Adds a product id unless it is already wishlisted.
    pub fn add_to_wishlist(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        if !self.wishlist.contains(product_id) {
            self.wishlist.push(product_id.clone());
        }
        self.persist_wishlist()?;
        info!(%product_id, size = self.wishlist.len(), "Wishlisted");
        Ok(())
    }

    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        self.wishlist.retain(|id| id != product_id);
        self.persist_wishlist()?;
        info!(%product_id, size = self.wishlist.len(), "Removed from wishlist");
        Ok(())
    }

    /// Moves a wishlisted product into the cart.
    ///
    /// Unlike [`Store::add_to_cart`] this always appends a fresh line with
    /// quantity 1, even when the cart already holds the product.
    pub fn move_wish_to_cart(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let Some(product) = find_product(product_id) else {
            debug!(%product_id, "Unknown product, move_wish_to_cart ignored");
            return Ok(());
        };

        self.cart.push(CartLine::from_product(&product));
        self.wishlist.retain(|id| id != product_id);
        self.persist_cart()?;
        self.persist_wishlist()?;
        info!(%product_id, lines = self.cart.len(), "Moved from wishlist to cart");
        Ok(())
    }

    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }
}
