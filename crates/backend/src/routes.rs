use axum::{routing::get, Router};

use crate::handlers;

/// All API routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/resources/:id", get(handlers::a001_resource::get_by_id))
        .route(
            "/api/resources/:id/versions",
            get(handlers::a001_resource::list_versions),
        )
}
