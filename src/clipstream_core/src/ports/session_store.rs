use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account_id::AccountId;

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Presented token is not the current session token")]
    TokenMismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::TokenMismatch, Self::TokenMismatch) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Single-slot refresh-token state per account.
///
/// The slot is the whole session model: one live refresh token at a time,
/// superseded by overwrite rather than tracked in a revocation list.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Unconditionally overwrite the slot (login).
    async fn record_session(&self, id: &AccountId, token: String)
    -> Result<(), SessionStoreError>;

    /// Atomic compare-and-swap (refresh rotation): replaces the slot with
    /// `next` only if it currently holds exactly `presented`. Fails with
    /// `TokenMismatch` when the presented token has been superseded or the
    /// session was logged out, so two refreshes racing on the same stale
    /// token cannot both succeed.
    async fn rotate_session(
        &self,
        id: &AccountId,
        presented: &str,
        next: String,
    ) -> Result<(), SessionStoreError>;

    /// Clear the slot (logout). Clearing an already-empty slot is not an
    /// error.
    async fn clear_session(&self, id: &AccountId) -> Result<(), SessionStoreError>;

    /// Read the current token, if any.
    async fn current_token(&self, id: &AccountId) -> Result<Option<String>, SessionStoreError>;
}
