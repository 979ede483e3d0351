use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use clipstream_application::RefreshSessionUseCase;
use clipstream_core::{AccountStore, SessionStore};

use crate::state::AppState;

use super::error::SessionApiError;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Rotate the session: a valid refresh token buys a fresh pair and
/// invalidates itself. The token may come from the cookie or the body.
#[tracing::instrument(name = "Refresh session", skip_all)]
pub async fn refresh<P>(
    State(state): State<AppState<P>>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let presented = jar
        .get(state.cookies.refresh_name())
        .map(|cookie| cookie.value().to_string())
        .or_else(|| body.and_then(|Json(request)| request.refresh_token))
        .ok_or(SessionApiError::MissingToken)?;

    let tokens = RefreshSessionUseCase::new(
        state.store.clone(),
        state.token_issuer,
        state.store,
    )
    .execute(presented)
    .await?;

    let jar = state.cookies.issue(jar, &tokens);

    Ok((
        jar,
        Json(RefreshResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }),
    ))
}
