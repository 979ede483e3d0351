use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use clipstream_application::ChangePasswordUseCase;
use clipstream_core::{AccountStore, Password, SessionStore};

use crate::state::AppState;

use super::error::SessionApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
}

/// Rotate the account credential. The active session is revoked along with
/// it, so the cookies are expired too; the caller logs in again with the new
/// password.
#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password<P>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let profile = state.auth_gate.authorize(&headers).await?;

    let current = Password::try_from(request.old_password)?;
    let new = Password::try_from(request.new_password)?;

    ChangePasswordUseCase::new(state.store.clone(), state.credential_hasher, state.store)
        .execute(&profile.id, current, new)
        .await?;

    let jar = state.cookies.clear(jar);

    Ok((
        jar,
        Json(serde_json::json!({ "message": "Password changed" })),
    ))
}
