use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    account_id::AccountId,
    login_id::LoginId,
    password::PasswordDigest,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Username or email already taken")]
    DuplicateAccount,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateAccount, Self::DuplicateAccount) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for account records.
///
/// Password digests are written only on creation and through
/// `set_password_digest` - the two explicit write paths.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add_account(&self, fields: NewAccount) -> Result<Account, AccountStoreError>;
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
    async fn find_by_login(&self, login: &LoginId) -> Result<Account, AccountStoreError>;
    async fn set_password_digest(
        &self,
        id: &AccountId,
        digest: PasswordDigest,
    ) -> Result<(), AccountStoreError>;
}
