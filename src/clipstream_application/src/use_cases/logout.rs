use clipstream_core::{AccountId, SessionStore, SessionStoreError};

/// Error types for the logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    Session(#[from] SessionStoreError),
}

/// Logout use case - clears the account's refresh-token slot.
///
/// Idempotent: clearing an already-absent session succeeds.
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, account_id: &AccountId) -> Result<(), LogoutError> {
        self.session_store.clear_session(account_id).await?;
        Ok(())
    }
}
