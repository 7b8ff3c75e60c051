//! Registration, login and logout.

use super::validation::{authenticate, validate_registration};
use super::{Store, StoreError};
use crate::model::{Credentials, Registration, Session};
use crate::storage::KeyValueStorage;
use tracing::{info, warn};

impl<S: KeyValueStorage> Store<S> {
    /// Registers a new account. Does not log it in.
    pub fn register(&mut self, registration: Registration) -> Result<(), StoreError> {
        let account = validate_registration(&registration, &self.users).inspect_err(|e| {
            warn!(username = %registration.username, error = %e, "Registration rejected");
        })?;

        let username = account.username.clone();
        self.users.push(account);
        self.persist_users()?;
        info!(%username, users = self.users.len(), "Registered");
        Ok(())
    }

    /// Logs in by username or email and replaces the current session.
    ///
    /// A failed attempt leaves the existing session untouched.
    pub fn login(&mut self, credentials: Credentials) -> Result<Session, StoreError> {
        let session = authenticate(&credentials, &self.users)
            .map(Session::from)
            .inspect_err(|e| {
                warn!(identifier = %credentials.identifier, error = %e, "Login rejected");
            })?;

        self.session = Some(session.clone());
        self.persist_session()?;
        info!(username = %session.username, "Logged in");
        Ok(session)
    }

    /// Clears the session. Logging out while logged out is a no-op write.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        let previous = self.session.take();
        self.persist_session()?;
        if let Some(session) = previous {
            info!(username = %session.username, "Logged out");
        }
        Ok(())
    }
}
