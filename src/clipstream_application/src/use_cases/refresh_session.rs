use clipstream_core::{
    AccountStore, AccountStoreError, SessionStore, SessionStoreError, TokenIssuer,
    TokenIssuerError,
};

use crate::session::SessionTokens;

/// Error types for the refresh use case
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// Malformed, expired, or pointing at an unknown subject. One kind for
    /// all three so callers learn nothing about which check failed.
    #[error("Invalid token")]
    InvalidToken,
    /// Cryptographically valid but no longer the stored token: it was
    /// rotated away or the account logged out.
    #[error("Session revoked")]
    SessionRevoked,
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

/// Refresh use case - rotates the session: every successful refresh issues a
/// new pair and invalidates the token that was just used.
pub struct RefreshSessionUseCase<A, T, S>
where
    A: AccountStore,
    T: TokenIssuer,
    S: SessionStore,
{
    account_store: A,
    token_issuer: T,
    session_store: S,
}

impl<A, T, S> RefreshSessionUseCase<A, T, S>
where
    A: AccountStore,
    T: TokenIssuer,
    S: SessionStore,
{
    pub fn new(account_store: A, token_issuer: T, session_store: S) -> Self {
        Self {
            account_store,
            token_issuer,
            session_store,
        }
    }

    #[tracing::instrument(name = "RefreshSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, presented: String) -> Result<SessionTokens, RefreshError> {
        let claims = self
            .token_issuer
            .verify_refresh(&presented)
            .map_err(|_| RefreshError::InvalidToken)?;

        let account = self
            .account_store
            .find_by_id(&claims.sub)
            .await
            .map_err(|err| match err {
                AccountStoreError::AccountNotFound => RefreshError::InvalidToken,
                other => RefreshError::InternalFailure(other.to_string()),
            })?;

        // Issue-then-commit: generate the full pair before any store write.
        let access_token = self
            .token_issuer
            .issue_access(&account)
            .map_err(generation_failure)?;
        let refresh_token = self
            .token_issuer
            .issue_refresh(&account)
            .map_err(generation_failure)?;

        // The compare-and-swap is the reuse check. A presented token that no
        // longer matches the slot has been superseded or logged out.
        self.session_store
            .rotate_session(account.id(), &presented, refresh_token.clone())
            .await
            .map_err(|err| match err {
                SessionStoreError::TokenMismatch => RefreshError::SessionRevoked,
                SessionStoreError::AccountNotFound => RefreshError::InvalidToken,
                other => RefreshError::InternalFailure(other.to_string()),
            })?;

        Ok(SessionTokens {
            access_token,
            refresh_token,
        })
    }
}

fn generation_failure(err: TokenIssuerError) -> RefreshError {
    RefreshError::InternalFailure(err.to_string())
}
