use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use clipstream_adapters::config::AllowedOrigins;
use clipstream_core::{AccountStore, SessionStore};

use crate::routes::{change_password, login, logout, me, refresh, register};
use crate::state::AppState;
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The session service: all credential and session lifecycle routes.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    pub fn new<P>(state: AppState<P>) -> Self
    where
        P: AccountStore + SessionStore + Clone + Send + Sync + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<P>))
            .route("/login", post(login::<P>))
            .route("/refresh", post(refresh::<P>))
            .route("/logout", post(logout::<P>))
            .route("/change-password", post(change_password::<P>))
            .route("/me", get(me::<P>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested under another
    /// application, with CORS applied when origins are configured.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the session service as a standalone server.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Session service listening on {}", listener.local_addr()?);

        axum_server::from_tcp(listener.into_std()?)?
            .serve(router.into_make_service())
            .await
    }
}
