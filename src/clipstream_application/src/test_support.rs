//! Shared in-memory doubles for use-case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use clipstream_core::{
    AccessClaims, Account, AccountId, AccountStore, AccountStoreError, CredentialHasher,
    CredentialHasherError, DisplayName, Email, LoginId, NewAccount, Password, PasswordDigest,
    RefreshClaims, SessionStore, SessionStoreError, TokenIssuer, TokenIssuerError, Username,
};

#[derive(Default, Clone)]
pub struct MemoryAccounts {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl AccountStore for MemoryAccounts {
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
        self.accounts
            .read()
            .await
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

    async fn set_password_digest(
        &self,
        id: &AccountId,
        digest: PasswordDigest,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(AccountStoreError::AccountNotFound)?;
        account.set_password_digest(digest);
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for MemoryAccounts {
    async fn record_session(
        &self,
        id: &AccountId,
        token: String,
    ) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(SessionStoreError::AccountNotFound)?;
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
        let account = accounts.get_mut(id).ok_or(SessionStoreError::AccountNotFound)?;
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

/// Hasher double: digest is the plaintext behind a marker prefix.
#[derive(Default, Clone)]
pub struct PlainHasher;

#[async_trait::async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: Password) -> Result<PasswordDigest, CredentialHasherError> {
        PasswordDigest::try_from(Secret::from(format!(
            "plain:{}",
            password.as_ref().expose_secret()
        )))
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, CredentialHasherError> {
        let expected = format!("plain:{}", candidate.as_ref().expose_secret());
        Ok(digest.as_ref().expose_secret() == &expected)
    }
}

/// Issuer double: tokens are `access.<id>.<n>` / `refresh.<id>.<n>` where the
/// counter makes every token unique, like a real jti does.
#[derive(Default, Clone)]
pub struct StubTokenIssuer {
    counter: Arc<AtomicU64>,
}

impl StubTokenIssuer {
    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    fn parse_subject(token: &str, kind: &str) -> Result<AccountId, TokenIssuerError> {
        let rest = token
            .strip_prefix(&format!("{kind}."))
            .ok_or(TokenIssuerError::InvalidToken)?;
        let (id, _) = rest.split_once('.').ok_or(TokenIssuerError::InvalidToken)?;
        id.parse().map_err(|_| TokenIssuerError::InvalidToken)
    }
}

impl TokenIssuer for StubTokenIssuer {
    fn issue_access(&self, account: &Account) -> Result<String, TokenIssuerError> {
        Ok(format!("access.{}.{}", account.id(), self.next()))
    }

    fn issue_refresh(&self, account: &Account) -> Result<String, TokenIssuerError> {
        Ok(format!("refresh.{}.{}", account.id(), self.next()))
    }

    fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenIssuerError> {
        let sub = Self::parse_subject(token, "access")?;
        Ok(AccessClaims {
            sub,
            username: String::new(),
            email: String::new(),
            display_name: String::new(),
            exp: usize::MAX,
        })
    }

    fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenIssuerError> {
        let sub = Self::parse_subject(token, "refresh")?;
        Ok(RefreshClaims {
            sub,
            jti: Uuid::new_v4(),
            exp: usize::MAX,
        })
    }
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

/// Insert an account whose digest matches `PlainHasher`'s scheme.
pub async fn seed_account(
    store: &MemoryAccounts,
    username: &str,
    email: &str,
    plaintext: &str,
) -> Account {
    store
        .add_account(NewAccount {
            username: Username::try_from(username.to_string()).unwrap(),
            email: Email::try_from(email.to_string()).unwrap(),
            display_name: DisplayName::try_from(username.to_string()).unwrap(),
            password_digest: PasswordDigest::try_from(Secret::from(format!("plain:{plaintext}")))
                .unwrap(),
            avatar: None,
            cover_image: None,
        })
        .await
        .unwrap()
}
