//! # Clipstream - Credential & Session Lifecycle Library
//!
//! This is a facade crate that re-exports all public APIs from the session
//! service components. Use this crate to get access to the full credential
//! and session lifecycle in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `Account`, etc.
//! - **Ports**: `AccountStore`, `SessionStore`, `CredentialHasher`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `RefreshSessionUseCase`, etc.
//! - **Adapters**: `ArgonCredentialHasher`, `JwtTokenIssuer`, `InMemoryAccountStore`
//! - **Service**: `AuthService` - the runnable axum surface

/// Core domain types and value objects
pub mod core {
    pub use clipstream_core::*;
}

// Re-export most commonly used core types at the root level
pub use clipstream_core::{
    Account, AccountId, AccountProfile, DisplayName, Email, LoginId, NewAccount, Password,
    PasswordDigest, Username,
};

/// Port trait definitions
pub mod ports {
    pub use clipstream_core::{
        AccessClaims, AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError,
        RefreshClaims, SessionStore, SessionStoreError, TokenIssuer, TokenIssuerError,
    };
}

pub use ports::{
    AccountStore, AccountStoreError, CredentialHasher, SessionStore, SessionStoreError,
    TokenIssuer, TokenIssuerError,
};

/// Application use cases
pub mod use_cases {
    pub use clipstream_application::*;
}

pub use clipstream_application::{
    AuthorizeUseCase, ChangePasswordUseCase, LoginUseCase, LogoutUseCase, RefreshSessionUseCase,
    RegisterUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// Password hashing
    pub mod hashing {
        pub use clipstream_adapters::hashing::*;
    }

    /// Token issuing and verification
    pub mod tokens {
        pub use clipstream_adapters::tokens::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use clipstream_adapters::persistence::*;
    }

    /// Request authorization gate
    pub mod auth_gate {
        pub use clipstream_adapters::auth_gate::*;
    }

    /// Configuration
    pub mod config {
        pub use clipstream_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use clipstream_adapters::{
    auth_gate::AuthGate,
    hashing::ArgonCredentialHasher,
    persistence::InMemoryAccountStore,
    tokens::{JwtTokenIssuer, TokenSettings},
};

/// Main auth service
pub use clipstream_auth_service::AuthService;

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
