use super::traits::StoreClient;
use crate::framework::{StoreHandle, StoreRequest};
use crate::model::{Credentials, Registration, Session};
use crate::store::StoreError;
use tracing::{debug, instrument};

/// Client for registration and the login session.
#[derive(Clone)]
pub struct AccountClient {
    handle: StoreHandle,
}

impl AccountClient {
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    #[instrument(skip(self))]
    pub async fn register(&self, registration: Registration) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::Register {
                registration,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn login(&self, credentials: Credentials) -> Result<Session, StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::Login {
                credentials,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), StoreError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| StoreRequest::Logout { respond_to })
            .await?
    }

    /// The logged-in identity, if any.
    pub async fn session(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.snapshot().await?.session)
    }
}

impl StoreClient for AccountClient {
    fn handle(&self) -> &StoreHandle {
        &self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_handle, next_request};

    #[tokio::test]
    async fn test_login_returns_session_from_actor() {
        let (handle, mut receiver) = create_mock_handle(4);
        let accounts = AccountClient::new(handle);

        let task = tokio::spawn(async move {
            accounts
                .login(Credentials::new("a@b.com", "secret1"))
                .await
        });

        match next_request(&mut receiver).await {
            Some(StoreRequest::Login {
                credentials,
                respond_to,
            }) => {
                assert_eq!(credentials.identifier, "a@b.com");
                respond_to
                    .send(Ok(Session {
                        username: "alice".into(),
                        email: "a@b.com".into(),
                    }))
                    .unwrap();
            }
            other => panic!("unexpected request: {other:?}"),
        }

        let session = task.await.unwrap().unwrap();
        assert_eq!(session.username, "alice");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("alice", "secret1"));
        assert!(!rendered.contains("secret1"));
        assert!(rendered.contains("alice"));
    }
}
