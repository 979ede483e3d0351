use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use clipstream_core::{CredentialHasher, CredentialHasherError, Password, PasswordDigest};

/// Argon2id work factor. The defaults land around 100ms per hash on
/// commodity hardware.
#[derive(Debug, Clone)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Argon2id credential hasher.
///
/// Hashing and verification are CPU-bound, so both run on the blocking
/// thread pool; the async scheduler never waits behind a hash.
#[derive(Debug, Clone)]
pub struct ArgonCredentialHasher {
    settings: HashingSettings,
}

impl ArgonCredentialHasher {
    pub fn new(settings: HashingSettings) -> Self {
        Self { settings }
    }

    fn params(settings: &HashingSettings) -> Result<Params, CredentialHasherError> {
        Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
    }
}

impl Default for ArgonCredentialHasher {
    fn default() -> Self {
        Self::new(HashingSettings::default())
    }
}

#[async_trait]
impl CredentialHasher for ArgonCredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordDigest, CredentialHasherError> {
        let settings = self.settings.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let digest = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                let hasher = Argon2::new(
                    Algorithm::Argon2id,
                    Version::V0x13,
                    Self::params(&settings)?,
                );
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))??;

        PasswordDigest::try_from(digest)
            .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, CredentialHasherError> {
        let settings = self.settings.clone();
        let candidate = candidate.clone();
        let expected = digest.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash: PasswordHash<'_> = PasswordHash::new(expected.expose_secret())
                    .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))?;

                let verifier = Argon2::new(
                    Algorithm::Argon2id,
                    Version::V0x13,
                    Self::params(&settings)?,
                );

                match verifier.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &expected_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialHasherError::HashingFailure(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))?
    }
}
