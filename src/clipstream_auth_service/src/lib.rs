pub mod auth_service;
pub mod cookies;
pub mod routes;
pub mod state;
pub mod tracing;

pub use auth_service::AuthService;
pub use cookies::SessionCookies;
pub use state::AppState;
