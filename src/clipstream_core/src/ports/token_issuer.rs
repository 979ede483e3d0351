use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{account::Account, account_id::AccountId};

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    /// Signature invalid, malformed, or expired - deliberately collapsed
    /// into one kind so callers cannot tell which check failed.
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token generation failed: {0}")]
    GenerationFailure(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::GenerationFailure(_), Self::GenerationFailure(_)) => true,
            _ => false,
        }
    }
}

/// Payload of a signed access token: just enough to authorize a request.
/// Never persisted; no password material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: AccountId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub exp: usize,
}

/// Payload of a signed refresh token: just enough to identify the subject.
/// The `jti` makes every issued token a distinct string, so rotation is
/// observable even for tokens minted within the same second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: AccountId,
    pub jti: Uuid,
    pub exp: usize,
}

/// Builds and verifies signed access/refresh tokens.
///
/// Access and refresh tokens are signed with distinct secrets so that
/// compromise of one never forges the other. Signing and verification are
/// pure CPU work - no suspension points.
pub trait TokenIssuer: Send + Sync {
    fn issue_access(&self, account: &Account) -> Result<String, TokenIssuerError>;
    fn issue_refresh(&self, account: &Account) -> Result<String, TokenIssuerError>;
    fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenIssuerError>;
    fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenIssuerError>;
}
