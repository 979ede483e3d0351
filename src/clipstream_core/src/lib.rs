pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountProfile, NewAccount},
    account_id::AccountId,
    display_name::DisplayName,
    email::Email,
    login_id::LoginId,
    password::{Password, PasswordDigest},
    username::Username,
    validation::ValidationError,
};

pub use ports::{
    account_store::{AccountStore, AccountStoreError},
    credential_hasher::{CredentialHasher, CredentialHasherError},
    session_store::{SessionStore, SessionStoreError},
    token_issuer::{AccessClaims, RefreshClaims, TokenIssuer, TokenIssuerError},
};
