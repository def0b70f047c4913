use crate::handlers::{health_check, report_by_path, report_by_query};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(report_by_query))
        .route("/health", get(health_check))
        .route("/:zip", get(report_by_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
