use tokio::net::TcpListener;

use clipstream_adapters::{
    ArgonCredentialHasher, InMemoryAccountStore, JwtTokenIssuer,
    config::{SessionServiceSettings, constants},
};
use clipstream_auth_service::{AppState, AuthService, SessionCookies, tracing::init_tracing};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = SessionServiceSettings::load()?;

    let state = AppState::new(
        InMemoryAccountStore::new(),
        ArgonCredentialHasher::new(settings.hashing_settings()),
        JwtTokenIssuer::new(settings.token_settings()),
        SessionCookies::new(settings.cookie_settings()),
    );

    let listener = TcpListener::bind(constants::prod::APP_ADDRESS).await?;

    AuthService::new(state)
        .run_standalone(listener, settings.allowed_origins())
        .await?;

    Ok(())
}
