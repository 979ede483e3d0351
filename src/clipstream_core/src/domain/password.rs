use secrecy::{ExposeSecret, Secret};

use crate::domain::validation::ValidationError;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Plaintext password, wrapped so it never appears in logs or debug output.
///
/// Only the `CredentialHasher` is expected to expose the inner secret.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        if raw.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(Self(raw))
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// Salted one-way digest of a password, in PHC string format.
///
/// The invariant that an account's digest is never empty is enforced here.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for PasswordDigest {
    type Error = ValidationError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        if raw.expose_secret().is_empty() {
            return Err(ValidationError::EmptyPasswordDigest);
        }

        Ok(Self(raw))
    }
}
