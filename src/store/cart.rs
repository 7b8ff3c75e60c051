//! Cart operations and checkout.

use super::{Store, StoreError};
use crate::model::{self, find_product, CartLine, ProductId, Receipt};
use crate::storage::KeyValueStorage;
use tracing::{debug, info, warn};

impl<S: KeyValueStorage> Store<S> {
    /// Adds one unit of a catalog product, merging with an existing line.
    ///
    /// Unknown products are ignored.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let Some(product) = find_product(product_id) else {
            debug!(%product_id, "Unknown product, add_to_cart ignored");
            return Ok(());
        };

        match self.cart.iter().position(|l| &l.product_id == product_id) {
            Some(i) => {
                let line = &mut self.cart[i];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.cart.push(CartLine::from_product(&product)),
        }
        self.persist_cart()?;
        info!(%product_id, lines = self.cart.len(), "Added to cart");
        Ok(())
    }

    /// Sets a line's quantity from raw user input.
    ///
    /// Input that does not parse to a positive integer becomes 1.
    /// Missing lines are ignored.
    pub fn set_cart_quantity(&mut self, product_id: &ProductId, value: &str) -> Result<(), StoreError> {
        let quantity = model::parse_quantity(value);
        let Some(line) = self.cart.iter_mut().find(|l| &l.product_id == product_id) else {
            debug!(%product_id, "No cart line, set_cart_quantity ignored");
            return Ok(());
        };

        line.quantity = quantity;
        self.persist_cart()?;
        info!(%product_id, quantity, "Cart quantity set");
        Ok(())
    }

    /// Removes the product's line, if present.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let before = self.cart.len();
        self.cart.retain(|l| &l.product_id != product_id);
        self.persist_cart()?;
        info!(%product_id, removed = before - self.cart.len(), "Removed from cart");
        Ok(())
    }

    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist_cart()?;
        info!("Cart cleared");
        Ok(())
    }

    /// Places the order: returns a receipt and empties the cart.
    pub fn checkout(&mut self) -> Result<Receipt, StoreError> {
        if self.cart.is_empty() {
            warn!("Checkout with empty cart");
            return Err(StoreError::EmptyCart);
        }

        let receipt = Receipt {
            total: self.cart_total(),
            lines: self.cart.clone(),
        };
        self.clear_cart()?;
        info!(total = receipt.total, lines = receipt.lines.len(), "Order placed");
        Ok(receipt)
    }

    pub fn cart_total(&self) -> u64 {
        model::cart_total(&self.cart)
    }

    pub fn cart_count(&self) -> u64 {
        model::cart_count(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ProductId;
    use crate::storage::{keys, KeyValueStorage, MemoryStorage};
    use crate::store::{Store, StoreError};

    fn pid(id: &str) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut store = Store::load(MemoryStorage::new());
        store.add_to_cart(&pid("p1")).unwrap();
        store.add_to_cart(&pid("p1")).unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].quantity, 2);
        assert_eq!(store.cart()[0].name, "Wireless Earbuds");
        assert_eq!(store.cart()[0].price, 1299);
    }

    #[test]
    fn test_extreme_stored_cart_does_not_panic() {
        let storage = MemoryStorage::with_values([(
            keys::CART,
            format!(
                r#"[{{"id":"p1","name":"Wireless Earbuds","price":1299,"qty":{}}},{{"id":"p4","name":"DSLR Camera","price":{},"qty":2}},{{"id":"p3","name":"Bluetooth Speaker","price":899,"qty":0}}]"#,
                u32::MAX,
                u64::MAX
            ),
        )]);
        let mut store = Store::load(storage);
        assert_eq!(store.cart()[2].quantity, 1);

        store.add_to_cart(&pid("p1")).unwrap();
        assert_eq!(store.cart()[0].quantity, u32::MAX);
        assert_eq!(store.cart_total(), u64::MAX);

        let receipt = store.checkout().unwrap();
        assert_eq!(receipt.total, u64::MAX);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut store = Store::load(MemoryStorage::new());
        store.add_to_cart(&pid("nope")).unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(store.storage().get(keys::CART).unwrap(), None);
    }

    #[test]
    fn test_mutation_is_persisted_before_return() {
        let mut store = Store::load(MemoryStorage::new());
        store.add_to_cart(&pid("p3")).unwrap();

        let raw = store.storage().get(keys::CART).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"p3","name":"Bluetooth Speaker","price":899,"qty":1}]"#);
    }

    #[test]
    fn test_set_quantity() {
        let mut store = Store::load(MemoryStorage::new());
        store.add_to_cart(&pid("p2")).unwrap();

        store.set_cart_quantity(&pid("p2"), "3").unwrap();
        assert_eq!(store.cart()[0].quantity, 3);

        store.set_cart_quantity(&pid("p2"), "abc").unwrap();
        assert_eq!(store.cart()[0].quantity, 1);

        store.set_cart_quantity(&pid("p6"), "5").unwrap();
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_remove_and_totals() {
        let mut store = Store::load(MemoryStorage::new());
        store.add_to_cart(&pid("p1")).unwrap();
        store.add_to_cart(&pid("p1")).unwrap();
        store.add_to_cart(&pid("p3")).unwrap();
        assert_eq!(store.cart_total(), 1299 * 2 + 899);
        assert_eq!(store.cart_count(), 3);

        store.remove_from_cart(&pid("p1")).unwrap();
        assert_eq!(store.cart_total(), 899);
        store.remove_from_cart(&pid("p1")).unwrap();
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn test_checkout() {
        let mut store = Store::load(MemoryStorage::new());
        assert!(matches!(store.checkout(), Err(StoreError::EmptyCart)));

        store.add_to_cart(&pid("p4")).unwrap();
        store.add_to_cart(&pid("p5")).unwrap();
        let receipt = store.checkout().unwrap();

        assert_eq!(receipt.total, 25999 + 1499);
        assert_eq!(receipt.lines.len(), 2);
        assert!(store.cart().is_empty());
        assert_eq!(store.storage().get(keys::CART).unwrap().as_deref(), Some("[]"));
    }
}
