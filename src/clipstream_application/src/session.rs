use clipstream_core::AccountProfile;

/// Freshly issued access/refresh pair.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful login: the sanitized account plus its tokens.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub account: AccountProfile,
    pub tokens: SessionTokens,
}
