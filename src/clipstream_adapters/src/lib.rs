pub mod auth_gate;
pub mod config;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use auth_gate::{AuthGate, AuthGateError};
pub use config::{AllowedOrigins, CookieSettings, SessionServiceSettings};
pub use hashing::{ArgonCredentialHasher, HashingSettings};
pub use persistence::InMemoryAccountStore;
pub use tokens::{JwtTokenIssuer, TokenSettings};
