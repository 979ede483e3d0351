use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::CookieJar;

use clipstream_application::LogoutUseCase;
use clipstream_core::{AccountStore, SessionStore};

use crate::state::AppState;

use super::error::SessionApiError;

/// Clear the caller's session slot and expire both cookies. Logging out an
/// already logged-out account succeeds; there is nothing to report.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<P>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let profile = state.auth_gate.authorize(&headers).await?;

    LogoutUseCase::new(state.store).execute(&profile.id).await?;

    let jar = state.cookies.clear(jar);

    Ok((jar, Json(serde_json::json!({ "message": "Logged out" }))))
}
