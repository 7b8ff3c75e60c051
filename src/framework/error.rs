//! # Framework Errors
//!
//! Failures of the actor plumbing itself, as opposed to store rule violations
//! ([`StoreError`](crate::store::StoreError)).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
