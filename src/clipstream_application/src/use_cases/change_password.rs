use clipstream_core::{
    AccountId, AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, Password,
    SessionStore, SessionStoreError,
};

/// Error types for the change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("New password must differ from the current password")]
    SamePassword,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Credential hasher error: {0}")]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
    #[error("Session store error: {0}")]
    Session(#[from] SessionStoreError),
}

impl From<AccountStoreError> for ChangePasswordError {
    fn from(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::AccountNotFound => Self::AccountNotFound,
            other => Self::Store(other),
        }
    }
}

/// Change password use case - verifies the current password, persists a new
/// digest, and revokes the active session.
///
/// Revoking on change is deliberate: rotating the credential must not leave a
/// session minted under the old credential alive.
pub struct ChangePasswordUseCase<A, H, S>
where
    A: AccountStore,
    H: CredentialHasher,
    S: SessionStore,
{
    account_store: A,
    credential_hasher: H,
    session_store: S,
}

impl<A, H, S> ChangePasswordUseCase<A, H, S>
where
    A: AccountStore,
    H: CredentialHasher,
    S: SessionStore,
{
    pub fn new(account_store: A, credential_hasher: H, session_store: S) -> Self {
        Self {
            account_store,
            credential_hasher,
            session_store,
        }
    }

    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip(self, current, new))]
    pub async fn execute(
        &self,
        account_id: &AccountId,
        current: Password,
        new: Password,
    ) -> Result<(), ChangePasswordError> {
        if current == new {
            return Err(ChangePasswordError::SamePassword);
        }

        let account = self.account_store.find_by_id(account_id).await?;

        let matches = self
            .credential_hasher
            .verify(&current, account.password_digest())
            .await?;
        if !matches {
            return Err(ChangePasswordError::InvalidCredentials);
        }

        let digest = self.credential_hasher.hash(new).await?;
        self.account_store
            .set_password_digest(account_id, digest)
            .await?;

        self.session_store.clear_session(account_id).await?;

        Ok(())
    }
}
