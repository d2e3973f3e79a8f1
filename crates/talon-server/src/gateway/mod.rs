//! HTTP gateway (Axum) over the match engine.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use talon::TextProvider;

pub use handler::{chat_handler, health_handler, recommend_handler, recommend_weighted_handler};
pub use state::AppState;

/// Origins allowed by the development CORS policy (the local frontends).
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// Builds the service router over the given state.
pub fn create_router_with_state<P>(state: AppState<P>) -> Router
where
    P: TextProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/recommend", post(recommend_handler))
        .route("/recommend/weighted", post(recommend_weighted_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
