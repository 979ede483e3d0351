use clipstream_core::{AccountProfile, AccountStore, AccountStoreError, TokenIssuer};

/// Error types for the authorize use case
#[derive(Debug, thiserror::Error)]
pub enum AuthorizeError {
    /// Bad signature, expired, or an unknown subject. A valid token whose
    /// account has disappeared reports the same kind, so callers cannot
    /// probe for account existence.
    #[error("Invalid token")]
    InvalidToken,
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

/// Authorize use case - the trust boundary for access tokens.
///
/// Every protected operation goes through here: verify the presented access
/// token, resolve its subject, and hand back the stripped account.
pub struct AuthorizeUseCase<A, T>
where
    A: AccountStore,
    T: TokenIssuer,
{
    account_store: A,
    token_issuer: T,
}

impl<A, T> AuthorizeUseCase<A, T>
where
    A: AccountStore,
    T: TokenIssuer,
{
    pub fn new(account_store: A, token_issuer: T) -> Self {
        Self {
            account_store,
            token_issuer,
        }
    }

    #[tracing::instrument(name = "AuthorizeUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<AccountProfile, AuthorizeError> {
        let claims = self
            .token_issuer
            .verify_access(token)
            .map_err(|_| AuthorizeError::InvalidToken)?;

        let account = self
            .account_store
            .find_by_id(&claims.sub)
            .await
            .map_err(|err| match err {
                AccountStoreError::AccountNotFound => AuthorizeError::InvalidToken,
                other => AuthorizeError::InternalFailure(other.to_string()),
            })?;

        Ok(account.profile())
    }
}
