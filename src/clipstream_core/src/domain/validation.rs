use thiserror::Error;

/// Input validation failures raised while parsing raw request fields into
/// domain types. All of these map to a 400 at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be 3-30 characters of letters, digits, '.', '_' or '-'")]
    InvalidUsername,
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("Display name must not be empty")]
    InvalidDisplayName,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password digest must not be empty")]
    EmptyPasswordDigest,
    #[error("Login identifier must not be empty")]
    EmptyLoginIdentifier,
}
