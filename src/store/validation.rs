//! Form validation for registration, login and reviews.

use super::StoreError;
use crate::model::{Credentials, Registration, ReviewCreate, UserAccount};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks a registration against the existing accounts and builds the new account.
///
/// Rules are applied in a fixed order and the first failure wins:
/// empty fields, email shape, password length, confirmation, then uniqueness.
/// Username and email are trimmed; passwords are taken verbatim.
pub fn validate_registration(
    registration: &Registration,
    existing: &[UserAccount],
) -> Result<UserAccount, StoreError> {
    let username = registration.username.trim();
    let email = registration.email.trim();
    let password = registration.password.as_str();

    if username.is_empty()
        || email.is_empty()
        || password.is_empty()
        || registration.password_confirm.is_empty()
    {
        return Err(StoreError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(StoreError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StoreError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password != registration.password_confirm {
        return Err(StoreError::PasswordMismatch);
    }
    if existing.iter().any(|u| u.username == username) {
        return Err(StoreError::UsernameTaken(username.to_string()));
    }
    if existing.iter().any(|u| u.email == email) {
        return Err(StoreError::EmailTaken(email.to_string()));
    }

    Ok(UserAccount {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Finds the account matching a login attempt.
///
/// The identifier is trimmed and matched against username or email; the
/// password must match exactly.
pub fn authenticate<'a>(
    credentials: &Credentials,
    accounts: &'a [UserAccount],
) -> Result<&'a UserAccount, StoreError> {
    let identifier = credentials.identifier.trim();
    if identifier.is_empty() || credentials.password.is_empty() {
        return Err(StoreError::MissingCredentials);
    }

    accounts
        .iter()
        .find(|u| {
            (u.username == identifier || u.email == identifier) && u.password == credentials.password
        })
        .ok_or(StoreError::InvalidCredentials)
}

/// Trims name and text, rejecting the review if either ends up empty.
pub fn validate_review(review: &ReviewCreate) -> Result<(String, String), StoreError> {
    let name = review.name.trim();
    let text = review.text.trim();
    if name.is_empty() || text.is_empty() {
        return Err(StoreError::EmptyReview);
    }
    Ok((name.to_string(), text.to_string()))
}
