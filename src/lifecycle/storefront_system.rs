use crate::clients::{AccountClient, CartClient, ReviewClient, WishlistClient};
use crate::framework::{FrameworkError, StoreActor};
use crate::storage::KeyValueStorage;
use crate::store::Store;
use tracing::{error, info};

/// Runtime orchestrator: owns the store actor task and hands out clients.
///
/// # Example
///
/// ```rust
/// use minicommerce::lifecycle::StorefrontSystem;
/// use minicommerce::model::ProductId;
/// use minicommerce::storage::MemoryStorage;
/// use minicommerce::store::Store;
///
/// #[tokio::main]
/// async fn main() {
///     let system = StorefrontSystem::start(Store::load(MemoryStorage::new()), 32);
///
///     system.cart.add(ProductId::new("p1")).await.unwrap();
///     assert_eq!(system.cart.view().await.unwrap().count, 1);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct StorefrontSystem {
    pub cart: CartClient,
    pub wishlist: WishlistClient,
    pub reviews: ReviewClient,
    pub accounts: AccountClient,

    /// Task handle of the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Spawns the store actor and wires every client to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<S: KeyValueStorage + 'static>(store: Store<S>, buffer_size: usize) -> Self {
        let (actor, store_handle) = StoreActor::new(store, buffer_size);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size, "Storefront system started");

        Self {
            cart: CartClient::new(store_handle.clone()),
            wishlist: WishlistClient::new(store_handle.clone()),
            reviews: ReviewClient::new(store_handle.clone()),
            accounts: AccountClient::new(store_handle),
            handle,
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the clients closes the channel once no clones remain; the actor
    /// then drains what is queued and exits. Clones held elsewhere keep the
    /// actor alive, so this waits until they are gone too.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down storefront...");

        drop(self.cart);
        drop(self.wishlist);
        drop(self.reviews);
        drop(self.accounts);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Store actor task failed");
            return Err(FrameworkError::TaskFailed(e.to_string()));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
