use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};

use clipstream_core::{AccountStore, SessionStore};

use crate::state::AppState;

use super::error::SessionApiError;

/// Return the authenticated account, digest and refresh token stripped.
#[tracing::instrument(name = "Current account", skip_all)]
pub async fn me<P>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let profile = state.auth_gate.authorize(&headers).await?;

    Ok(Json(profile))
}
