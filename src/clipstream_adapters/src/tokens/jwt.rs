use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use clipstream_core::{AccessClaims, Account, RefreshClaims, TokenIssuer, TokenIssuerError};

/// Secrets and lifetimes for the two token classes. Constructed once from
/// configuration and handed to the issuer - never read from the environment
/// at call sites.
#[derive(Clone)]
pub struct TokenSettings {
    pub access_secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_secret: Secret<String>,
    pub refresh_ttl_seconds: i64,
}

/// JWT-backed token issuer.
///
/// Access and refresh tokens are signed with distinct secrets; verifying a
/// token against the wrong class fails like any forged token would.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    settings: TokenSettings,
}

impl JwtTokenIssuer {
    pub fn new(settings: TokenSettings) -> Self {
        Self { settings }
    }

    fn sign<C: Serialize>(claims: &C, secret: &Secret<String>) -> Result<String, TokenIssuerError> {
        encode(
            &jsonwebtoken::Header::default(),
            claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )
        .map_err(|e| TokenIssuerError::GenerationFailure(e.to_string()))
    }

    fn decode_claims<C: DeserializeOwned>(
        token: &str,
        secret: &Secret<String>,
    ) -> Result<C, TokenIssuerError> {
        decode::<C>(
            token,
            &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        // Signature, shape, and expiry failures all collapse here
        .map_err(|_| TokenIssuerError::InvalidToken)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue_access(&self, account: &Account) -> Result<String, TokenIssuerError> {
        let claims = AccessClaims {
            sub: *account.id(),
            username: account.username().as_str().to_string(),
            email: account.email().as_str().to_string(),
            display_name: account.display_name().as_str().to_string(),
            exp: expiry_timestamp(self.settings.access_ttl_seconds)?,
        };

        Self::sign(&claims, &self.settings.access_secret)
    }

    fn issue_refresh(&self, account: &Account) -> Result<String, TokenIssuerError> {
        let claims = RefreshClaims {
            sub: *account.id(),
            jti: Uuid::new_v4(),
            exp: expiry_timestamp(self.settings.refresh_ttl_seconds)?,
        };

        Self::sign(&claims, &self.settings.refresh_secret)
    }

    fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenIssuerError> {
        Self::decode_claims(token, &self.settings.access_secret)
    }

    fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenIssuerError> {
        Self::decode_claims(token, &self.settings.refresh_secret)
    }
}

/// Absolute expiry deadline `ttl_seconds` from now, as the usize the claims
/// expect.
fn expiry_timestamp(ttl_seconds: i64) -> Result<usize, TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or(
        TokenIssuerError::GenerationFailure("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenIssuerError::GenerationFailure(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    exp.try_into()
        .map_err(|_| TokenIssuerError::GenerationFailure("Failed to cast i64 to usize".to_string()))
}
