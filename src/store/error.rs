//! Error type for store operations.

use crate::framework::FrameworkError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Validation variants carry the message shown to the shopper, so the
/// presentation layer can render `err.to_string()` directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required registration field was empty.
    #[error("Please fill all fields.")]
    MissingFields,

    #[error("Invalid email.")]
    InvalidEmail,

    #[error("Password must be at least {min} chars.")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// Another account already uses this username.
    #[error("User already exists.")]
    UsernameTaken(String),

    /// Another account already uses this email.
    #[error("User already exists.")]
    EmailTaken(String),

    /// Login identifier or password was empty.
    #[error("Please enter credentials.")]
    MissingCredentials,

    #[error("Invalid username/email or password.")]
    InvalidCredentials,

    /// Review name or text was empty after trimming.
    #[error("Please provide name and review.")]
    EmptyReview,

    #[error("Cart is empty.")]
    EmptyCart,

    /// The new state could not be written to storage.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The store actor is gone or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        StoreError::ActorCommunication(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collisions_show_the_same_message() {
        let by_name = StoreError::UsernameTaken("alice".to_string());
        let by_email = StoreError::EmailTaken("a@b.com".to_string());
        assert_eq!(by_name.to_string(), "User already exists.");
        assert_eq!(by_email.to_string(), "User already exists.");
    }
}
