use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    account_id::AccountId,
    display_name::DisplayName,
    email::Email,
    password::PasswordDigest,
    username::Username,
};

/// Identity record owned by the account store.
///
/// `refresh_token` is the single-slot session state: it is either absent or
/// exactly the most recently issued refresh token for this account. It is
/// mutated only through the `SessionStore` port.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    email: Email,
    display_name: DisplayName,
    password_digest: PasswordDigest,
    avatar: Option<String>,
    cover_image: Option<String>,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Fields required to create an account. The password arrives here already
/// hashed: creation is the explicit hash-then-persist path, there is no
/// hash-on-save hook.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub email: Email,
    pub display_name: DisplayName,
    pub password_digest: PasswordDigest,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
}

impl Account {
    pub fn new(fields: NewAccount) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            username: fields.username,
            email: fields.email,
            display_name: fields.display_name,
            password_digest: fields.password_digest,
            avatar: fields.avatar,
            cover_image: fields.cover_image,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the password digest. Store adapters call this from their
    /// explicit update path.
    pub fn set_password_digest(&mut self, digest: PasswordDigest) {
        self.password_digest = digest;
        self.touch();
    }

    /// Overwrite the single refresh-token slot.
    pub fn set_refresh_token(&mut self, token: Option<String>) {
        self.refresh_token = token;
        self.touch();
    }

    /// Sanitized projection with the password digest and refresh token
    /// stripped. This is the only shape that leaves the service.
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            username: self.username.as_str().to_string(),
            email: self.email.as_str().to_string(),
            display_name: self.display_name.as_str().to_string(),
            avatar: self.avatar.clone(),
            cover_image: self.cover_image.clone(),
            created_at: self.created_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Public account view, safe to serialize into responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}
