use clipstream_core::{
    AccountProfile, AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError,
    DisplayName, Email, NewAccount, Password, Username,
};

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Username or email already taken")]
    DuplicateAccount,
    #[error("Credential hasher error: {0}")]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

impl From<AccountStoreError> for RegisterError {
    fn from(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::DuplicateAccount => Self::DuplicateAccount,
            other => Self::Store(other),
        }
    }
}

/// Validated registration input. Media references arrive as opaque URLs;
/// uploading them is the media host's business, not ours.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub username: Username,
    pub email: Email,
    pub display_name: DisplayName,
    pub password: Password,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
}

/// Register use case - creates an account with a freshly hashed password.
///
/// Hashing happens here, explicitly, before anything touches the store.
pub struct RegisterUseCase<A, H>
where
    A: AccountStore,
    H: CredentialHasher,
{
    account_store: A,
    credential_hasher: H,
}

impl<A, H> RegisterUseCase<A, H>
where
    A: AccountStore,
    H: CredentialHasher,
{
    pub fn new(account_store: A, credential_hasher: H) -> Self {
        Self {
            account_store,
            credential_hasher,
        }
    }

    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, registration))]
    pub async fn execute(
        &self,
        registration: NewRegistration,
    ) -> Result<AccountProfile, RegisterError> {
        let digest = self.credential_hasher.hash(registration.password).await?;

        let account = self
            .account_store
            .add_account(NewAccount {
                username: registration.username,
                email: registration.email,
                display_name: registration.display_name,
                password_digest: digest,
                avatar: registration.avatar,
                cover_image: registration.cover_image,
            })
            .await?;

        Ok(account.profile())
    }
}
