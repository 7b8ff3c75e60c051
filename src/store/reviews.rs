//! Review submission.

use super::validation::validate_review;
use super::{Store, StoreError};
use crate::model::{Review, ReviewCreate};
use crate::storage::KeyValueStorage;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

impl<S: KeyValueStorage> Store<S> {
    /// Prepends a review stamped with the current time.
    pub fn submit_review(&mut self, review: ReviewCreate) -> Result<Review, StoreError> {
        self.submit_review_at(review, Utc::now())
    }

    pub(crate) fn submit_review_at(
        &mut self,
        review: ReviewCreate,
        created_at: DateTime<Utc>,
    ) -> Result<Review, StoreError> {
        let (name, text) = validate_review(&review).inspect_err(|e| {
            warn!(error = %e, "Review rejected");
        })?;

        let review = Review {
            name,
            rating: review.rating,
            text,
            created_at,
        };
        self.reviews.insert(0, review.clone());
        self.persist_reviews()?;
        info!(author = %review.name, size = self.reviews.len(), "Review submitted");
        Ok(review)
    }
}
