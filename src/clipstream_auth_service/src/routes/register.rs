use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use clipstream_application::{NewRegistration, RegisterUseCase};
use clipstream_core::{
    AccountStore, DisplayName, Email, Password, SessionStore, Username,
};

use crate::state::AppState;

use super::error::SessionApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub password: Secret<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, SessionApiError>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    let registration = NewRegistration {
        username: Username::try_from(request.username)?,
        email: Email::try_from(request.email)?,
        display_name: DisplayName::try_from(request.display_name)?,
        password: Password::try_from(request.password)?,
        avatar: request.avatar,
        cover_image: request.cover_image,
    };

    let profile = RegisterUseCase::new(state.store, state.credential_hasher)
        .execute(registration)
        .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}
