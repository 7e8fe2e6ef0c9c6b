pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod stateless_llm;
pub mod translate;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{Config, DeploymentMode};
pub use error::TranslateError;
pub use state::AppState;

/// Build the complete application router.
///
/// This is also the entry point for hosts that embed the service instead of
/// letting the binary listen on its own.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
