use crate::framework::{StoreHandle, StoreRequest};
use crate::store::{StoreError, StoreSnapshot};
use async_trait::async_trait;

/// Shared behaviour of the typed store clients.
///
/// Implementors only expose their [`StoreHandle`]; reads every client needs
/// come as provided methods.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Access the underlying handle.
    fn handle(&self) -> &StoreHandle;

    /// Fetch everything the presentation layer renders in one round trip.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        tracing::debug!("Sending request");
        let snapshot = self
            .handle()
            .call(|respond_to| StoreRequest::Snapshot { respond_to })
            .await?;
        Ok(snapshot)
    }
}
