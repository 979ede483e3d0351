use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clipstream_adapters::AuthGateError;
use clipstream_application::{
    ChangePasswordError, LoginError, LogoutError, RefreshError, RegisterError,
};
use clipstream_core::ValidationError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum SessionApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username or email already taken")]
    DuplicateAccount,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Session revoked")]
    SessionRevoked,

    #[error("New password must differ from the current password")]
    SamePassword,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for SessionApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            SessionApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            SessionApiError::DuplicateAccount => (StatusCode::CONFLICT, self.to_string()),

            SessionApiError::InvalidCredentials | SessionApiError::MissingToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            // A revoked session answers with the same body as a bad token so
            // the response does not reveal that the token was once live.
            SessionApiError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            SessionApiError::SessionRevoked => {
                tracing::warn!("Refresh rejected: presented token was superseded or cleared");
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }

            SessionApiError::SamePassword => (StatusCode::FORBIDDEN, self.to_string()),

            SessionApiError::UnexpectedError(ref cause) => {
                tracing::error!(%cause, "Unexpected failure handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<ValidationError> for SessionApiError {
    fn from(error: ValidationError) -> Self {
        SessionApiError::InvalidInput(error.to_string())
    }
}

impl From<RegisterError> for SessionApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::DuplicateAccount => SessionApiError::DuplicateAccount,
            other => SessionApiError::UnexpectedError(other.to_string()),
        }
    }
}

impl From<LoginError> for SessionApiError {
    fn from(error: LoginError) -> Self {
        match error {
            // Unknown identifier and wrong password answer alike, so login
            // cannot be used to enumerate accounts.
            LoginError::AccountNotFound | LoginError::InvalidCredentials => {
                SessionApiError::InvalidCredentials
            }
            other => SessionApiError::UnexpectedError(other.to_string()),
        }
    }
}

impl From<RefreshError> for SessionApiError {
    fn from(error: RefreshError) -> Self {
        match error {
            RefreshError::InvalidToken => SessionApiError::InvalidToken,
            RefreshError::SessionRevoked => SessionApiError::SessionRevoked,
            RefreshError::InternalFailure(cause) => SessionApiError::UnexpectedError(cause),
        }
    }
}

impl From<LogoutError> for SessionApiError {
    fn from(error: LogoutError) -> Self {
        SessionApiError::UnexpectedError(error.to_string())
    }
}

impl From<ChangePasswordError> for SessionApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::SamePassword => SessionApiError::SamePassword,
            ChangePasswordError::InvalidCredentials => SessionApiError::InvalidCredentials,
            other => SessionApiError::UnexpectedError(other.to_string()),
        }
    }
}

impl From<AuthGateError> for SessionApiError {
    fn from(error: AuthGateError) -> Self {
        match error {
            AuthGateError::MissingToken => SessionApiError::MissingToken,
            AuthGateError::InvalidToken => SessionApiError::InvalidToken,
            AuthGateError::InternalFailure(cause) => SessionApiError::UnexpectedError(cause),
        }
    }
}
