use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer review.
///
/// `rating` keeps the raw value submitted by the form; it is not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub rating: String,
    pub text: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a review.
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub name: String,
    pub rating: String,
    pub text: String,
}

impl ReviewCreate {
    pub fn new(
        name: impl Into<String>,
        rating: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating: rating.into(),
            text: text.into(),
        }
    }
}
