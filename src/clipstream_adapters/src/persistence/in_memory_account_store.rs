use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use clipstream_core::{
    Account, AccountId, AccountStore, AccountStoreError, LoginId, NewAccount, PasswordDigest,
    SessionStore, SessionStoreError,
};

/// In-memory account store.
///
/// All mutations run under one write lock per store, which is what makes
/// `rotate_session` a true compare-and-swap: the equality check and the
/// overwrite are a single critical section, so two refreshes racing on the
/// same stale token cannot both win.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    #[tracing::instrument(name = "Adding account to store", skip_all)]
    async fn add_account(&self, fields: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.username() == &fields.username || a.email() == &fields.email)
        {
            return Err(AccountStoreError::DuplicateAccount);
        }

        let account = Account::new(fields);
        accounts.insert(*account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_login(&self, login: &LoginId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| match login {
                LoginId::Username(username) => a.username() == username,
                LoginId::Email(email) => a.email() == email,
            })
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Set new password digest", skip_all)]
    async fn set_password_digest(
        &self,
        id: &AccountId,
        digest: PasswordDigest,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.set_password_digest(digest);
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemoryAccountStore {
    async fn record_session(
        &self,
        id: &AccountId,
        token: String,
    ) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or(SessionStoreError::AccountNotFound)?;
        account.set_refresh_token(Some(token));
        Ok(())
    }

    async fn rotate_session(
        &self,
        id: &AccountId,
        presented: &str,
        next: String,
    ) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or(SessionStoreError::AccountNotFound)?;

        if account.refresh_token() != Some(presented) {
            return Err(SessionStoreError::TokenMismatch);
        }

        account.set_refresh_token(Some(next));
        Ok(())
    }

    async fn clear_session(&self, id: &AccountId) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.get_mut(id) {
            account.set_refresh_token(None);
        }
        Ok(())
    }

    async fn current_token(&self, id: &AccountId) -> Result<Option<String>, SessionStoreError> {
        let accounts = self.accounts.read().await;
        let account = accounts.get(id).ok_or(SessionStoreError::AccountNotFound)?;
        Ok(account.refresh_token().map(str::to_string))
    }
}
