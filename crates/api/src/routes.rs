use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dig", post(handlers::dig))
        .route("/slack/dig", post(handlers::slash_dig))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
