use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordDigest};

#[derive(Debug, Error)]
pub enum CredentialHasherError {
    #[error("Hashing failure: {0}")]
    HashingFailure(String),
}

/// One-way password hashing and verification.
///
/// Implementations are CPU-bound and must run off the async scheduler (a
/// blocking worker pool) so concurrent requests are not serialized behind
/// hashing. A mismatched password is `Ok(false)`, not an error.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordDigest, CredentialHasherError>;
    async fn verify(
        &self,
        candidate: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, CredentialHasherError>;
}
