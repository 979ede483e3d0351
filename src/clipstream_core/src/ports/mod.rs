pub mod account_store;
pub mod credential_hasher;
pub mod session_store;
pub mod token_issuer;
