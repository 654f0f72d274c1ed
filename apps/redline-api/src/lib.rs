//! Redline API server - NDA analysis and redlining
//!
//! REST endpoints for:
//! - Document upload (.docx)
//! - Two-model clause analysis with validation
//! - Feedback-driven re-analysis
//! - Redline/clean document download

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod analysis;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use state::AppState;

/// Uploads beyond this size are rejected before processing.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for local development clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/upload", post(handlers::upload))
        .route("/analyze/:document_id", post(handlers::analyze))
        .route("/feedback/:document_id", post(handlers::feedback))
        .route("/download/:document_id", get(handlers::download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
