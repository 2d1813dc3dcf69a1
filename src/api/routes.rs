//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::models::requests::MAX_REQUEST_BODY_BYTES;

use super::handlers::{
    clear_cache_handler, content_analysis_handler, delete_document_handler,
    feedback_summary_handler, health_handler, learning_pathway_handler, lesson_plan_handler,
    list_documents_handler, rate_limit_handler, stats_handler, upload_document_handler,
    visualizations_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Body limit: Fits a base64 upload of `MAX_UPLOAD_BYTES`; larger
///   payloads are rejected by the handlers with a 400
/// - CORS: Allows any origin so the dashboard can be served from anywhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/lesson-plan", post(lesson_plan_handler))
        .route("/learning-pathway", post(learning_pathway_handler))
        .route("/content-analysis", post(content_analysis_handler))
        .route("/visualizations", post(visualizations_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/rate-limit", get(rate_limit_handler))
        .route("/feedback/summary", post(feedback_summary_handler))
        .route(
            "/documents/:owner_id",
            post(upload_document_handler).get(list_documents_handler),
        )
        .route(
            "/documents/:owner_id/:document_id",
            delete(delete_document_handler),
        )
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
