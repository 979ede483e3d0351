use axum::http::{HeaderMap, header};
use axum_extra::extract::CookieJar;

use clipstream_application::use_cases::authorize::{AuthorizeError, AuthorizeUseCase};
use clipstream_core::{AccountProfile, AccountStore, TokenIssuer};

#[derive(Debug, thiserror::Error)]
pub enum AuthGateError {
    #[error("No access token in request")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl From<AuthorizeError> for AuthGateError {
    fn from(err: AuthorizeError) -> Self {
        match err {
            AuthorizeError::InvalidToken => Self::InvalidToken,
            AuthorizeError::InternalFailure(e) => Self::InternalFailure(e),
        }
    }
}

/// Request-level guard for protected routes.
///
/// Pulls the access token out of the request (cookie first, then the
/// `Authorization` header) and runs it through the authorize use case.
#[derive(Clone)]
pub struct AuthGate<A, T>
where
    A: AccountStore + Clone,
    T: TokenIssuer + Clone,
{
    account_store: A,
    token_issuer: T,
    access_cookie_name: String,
}

impl<A, T> AuthGate<A, T>
where
    A: AccountStore + Clone,
    T: TokenIssuer + Clone,
{
    pub fn new(account_store: A, token_issuer: T, access_cookie_name: String) -> Self {
        Self {
            account_store,
            token_issuer,
            access_cookie_name,
        }
    }

    #[tracing::instrument(name = "Authorizing request", skip_all)]
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<AccountProfile, AuthGateError> {
        let token = self
            .extract_token(headers)
            .ok_or(AuthGateError::MissingToken)?;

        let profile =
            AuthorizeUseCase::new(self.account_store.clone(), self.token_issuer.clone())
                .execute(&token)
                .await?;

        Ok(profile)
    }

    fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        if let Some(cookie) = CookieJar::from_headers(headers).get(&self.access_cookie_name) {
            return Some(cookie.value().to_string());
        }

        headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::to_string)
    }
}
