//! # Store Handle
//!
//! The generic client half of the actor pair. Typed clients in
//! [`crate::clients`] wrap it; nothing else should build [`StoreRequest`]s.

use super::error::FrameworkError;
use super::message::{Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Cloneable sender for [`StoreRequest`]s. Holds only the channel sender.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreHandle {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for its reply.
    ///
    /// `make` receives the responder and builds the request around it.
    ///
    /// # Errors
    ///
    /// - [`FrameworkError::ActorClosed`] if the actor has stopped
    /// - [`FrameworkError::ActorDropped`] if it stopped before replying
    pub async fn call<T, F>(&self, make: F) -> Result<T, FrameworkError>
    where
        T: Send,
        F: FnOnce(Response<T>) -> StoreRequest + Send,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}
