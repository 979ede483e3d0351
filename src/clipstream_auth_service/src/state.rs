use clipstream_adapters::{ArgonCredentialHasher, AuthGate, JwtTokenIssuer};
use clipstream_core::{AccountStore, SessionStore};

use crate::cookies::SessionCookies;

/// Shared state for every route.
///
/// The store is generic so tests can run against the in-memory store while a
/// deployment swaps in a persistent one. Stores implement Clone via internal
/// Arc, so cloning state per request is cheap.
pub struct AppState<P>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    pub store: P,
    pub credential_hasher: ArgonCredentialHasher,
    pub token_issuer: JwtTokenIssuer,
    pub cookies: SessionCookies,
    pub auth_gate: AuthGate<P, JwtTokenIssuer>,
}

impl<P> AppState<P>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    pub fn new(
        store: P,
        credential_hasher: ArgonCredentialHasher,
        token_issuer: JwtTokenIssuer,
        cookies: SessionCookies,
    ) -> Self {
        let auth_gate = AuthGate::new(
            store.clone(),
            token_issuer.clone(),
            cookies.access_name().to_string(),
        );

        Self {
            store,
            credential_hasher,
            token_issuer,
            cookies,
            auth_gate,
        }
    }
}

impl<P> Clone for AppState<P>
where
    P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            credential_hasher: self.credential_hasher.clone(),
            token_issuer: self.token_issuer.clone(),
            cookies: self.cookies.clone(),
            auth_gate: self.auth_gate.clone(),
        }
    }
}
