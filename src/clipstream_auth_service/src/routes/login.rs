use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use clipstream_application::LoginUseCase;
use clipstream_core::{AccountProfile, AccountStore, LoginId, Password, SessionStore};

use crate::state::AppState;

use super::error::SessionApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub identifier: String,
    pub password: Secret<String>,
}

/// Tokens go out both ways: in the body for API clients and as http-only
/// cookies for browsers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: AccountProfile,
    pub access_token: String,
    pub refresh_token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<P>(
    State(state): State<AppState<P>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let identifier = LoginId::parse(&request.identifier)?;
    let password = Password::try_from(request.password)?;

    let session = LoginUseCase::new(
        state.store.clone(),
        state.credential_hasher,
        state.token_issuer,
        state.store,
    )
    .execute(identifier, password)
    .await?;

    let jar = state.cookies.issue(jar, &session.tokens);

    Ok((
        jar,
        Json(LoginResponse {
            user: session.account,
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
        }),
    ))
}
