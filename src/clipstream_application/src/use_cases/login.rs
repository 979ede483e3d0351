use clipstream_core::{
    AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, LoginId, Password,
    SessionStore, SessionStoreError, TokenIssuer, TokenIssuerError,
};

use crate::session::{AuthenticatedSession, SessionTokens};

/// Error types for the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Credential hasher error: {0}")]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
    #[error("Token issuer error: {0}")]
    Token(#[from] TokenIssuerError),
    #[error("Session store error: {0}")]
    Session(#[from] SessionStoreError),
}

impl From<AccountStoreError> for LoginError {
    fn from(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::AccountNotFound => Self::AccountNotFound,
            other => Self::Store(other),
        }
    }
}

/// Login use case - turns an identifier/password pair into a token pair and
/// establishes the account's single active session.
pub struct LoginUseCase<A, H, T, S>
where
    A: AccountStore,
    H: CredentialHasher,
    T: TokenIssuer,
    S: SessionStore,
{
    account_store: A,
    credential_hasher: H,
    token_issuer: T,
    session_store: S,
}

impl<A, H, T, S> LoginUseCase<A, H, T, S>
where
    A: AccountStore,
    H: CredentialHasher,
    T: TokenIssuer,
    S: SessionStore,
{
    pub fn new(account_store: A, credential_hasher: H, token_issuer: T, session_store: S) -> Self {
        Self {
            account_store,
            credential_hasher,
            token_issuer,
            session_store,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        identifier: LoginId,
        password: Password,
    ) -> Result<AuthenticatedSession, LoginError> {
        let account = self.account_store.find_by_login(&identifier).await?;

        let matches = self
            .credential_hasher
            .verify(&password, account.password_digest())
            .await?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        // Both tokens must exist before the store is touched; a generation
        // failure leaves the previous session intact.
        let access_token = self.token_issuer.issue_access(&account)?;
        let refresh_token = self.token_issuer.issue_refresh(&account)?;

        self.session_store
            .record_session(account.id(), refresh_token.clone())
            .await?;

        Ok(AuthenticatedSession {
            account: account.profile(),
            tokens: SessionTokens {
                access_token,
                refresh_token,
            },
        })
    }
}
