use super::traits::StoreClient;
use crate::framework::{StoreHandle, StoreRequest};
use crate::model::{Review, ReviewCreate};
use crate::store::StoreError;
use tracing::{debug, instrument};

/// Client for submitting and listing reviews.
#[derive(Clone)]
pub struct ReviewClient {
    handle: StoreHandle,
}

impl ReviewClient {
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, review: ReviewCreate) -> Result<Review, StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::SubmitReview { review, respond_to })
            .await?
    }

    /// All reviews, newest first.
    pub async fn list(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.snapshot().await?.reviews)
    }
}

impl StoreClient for ReviewClient {
    fn handle(&self) -> &StoreHandle {
        &self.handle
    }
}
