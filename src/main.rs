//! Scripted shopping session against a [`StorefrontSystem`].
//!
//! Drives the clients the way the storefront page would: browse, fill the
//! cart and wishlist, register, log in, review and check out.
//!
//! The optional first argument picks the listing order: `default`,
//! `price-asc` or `price-desc`.

use minicommerce::config::StorefrontConfig;
use minicommerce::lifecycle::{setup_tracing, StorefrontSystem};
use minicommerce::model::{catalog, Credentials, ProductId, Registration, ReviewCreate, SortOrder};
use minicommerce::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use minicommerce::store::Store;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    let storage: Box<dyn KeyValueStorage> = match &config.data_dir {
        Some(dir) => Box::new(FileStorage::open(dir)?),
        None => Box::new(MemoryStorage::new()),
    };
    info!(?config, "Starting storefront");

    let system = StorefrontSystem::start(Store::load(storage), config.channel_buffer);

    let sort = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<SortOrder>()?,
        None => SortOrder::Default,
    };
    for product in catalog(sort) {
        info!(id = %product.id, name = product.name, price = product.price, "Listing");
    }

    async {
        system.cart.add(ProductId::new("p1")).await?;
        system.cart.add(ProductId::new("p1")).await?;
        system.cart.add(ProductId::new("p3")).await?;
        system.cart.set_quantity(ProductId::new("p3"), "2").await?;

        system.wishlist.add(ProductId::new("p5")).await?;
        system.wishlist.add(ProductId::new("p6")).await?;
        system.wishlist.add(ProductId::new("p5")).await?;
        system.wishlist.move_to_cart(ProductId::new("p5")).await?;

        let cart = system.cart.view().await?;
        let wished = system.wishlist.products().await?;
        info!(lines = cart.lines.len(), items = cart.count, total = cart.total, wishlist = wished.len(), "Cart ready");
        Ok::<_, minicommerce::store::StoreError>(())
    }
    .instrument(tracing::info_span!("shopping"))
    .await?;

    async {
        system
            .accounts
            .register(Registration::new("alice", "alice@example.com", "secret1", "secret1"))
            .await?;

        if let Err(e) = system
            .accounts
            .register(Registration::new("alice", "other@example.com", "secret1", "secret1"))
            .await
        {
            warn!(error = %e, "Second registration refused");
        }

        let session = system
            .accounts
            .login(Credentials::new("alice@example.com", "secret1"))
            .await?;
        info!(username = %session.username, "Welcome");
        Ok::<_, minicommerce::store::StoreError>(())
    }
    .instrument(tracing::info_span!("account"))
    .await?;

    async {
        system
            .reviews
            .submit(ReviewCreate::new("alice", "5", "Fast delivery, great earbuds."))
            .await?;
        let reviews = system.reviews.list().await?;
        info!(count = reviews.len(), "Reviews");

        let receipt = system.cart.checkout().await?;
        info!(total = receipt.total, lines = receipt.lines.len(), "Order placed");

        if let Err(e) = system.cart.checkout().await {
            warn!(error = %e, "Nothing left to order");
        }

        system.accounts.logout().await?;
        Ok::<_, minicommerce::store::StoreError>(())
    }
    .instrument(tracing::info_span!("checkout"))
    .await?;

    system.shutdown().await?;
    info!("Session completed successfully");
    Ok(())
}
