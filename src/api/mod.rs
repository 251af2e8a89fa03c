//! HTTP API module
//! 
//! This module contains all HTTP endpoint handlers, response structures and
//! the error boundary.

pub mod errors;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

pub use errors::AppError;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer", get(timer_handler))
        .route("/timer/adjust/:direction", post(adjust_handler))
        .route("/timer/toggle", post(toggle_handler))
        .route("/timer/reset", post(reset_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
