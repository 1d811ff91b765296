//! Gridpin Service Library
//!
//! HTTP handlers and router for the grid geocoding service.
//! This library is used by both the gridpin-service binary and integration
//! tests.

use axum::{routing::get, Router};

pub mod handlers;

/// Build the service router.
///
/// The core is pure, so the router carries no state; middleware and the
/// Swagger UI are layered on by the binary.
pub fn router() -> Router {
    Router::new()
        .route("/encode", get(handlers::get_encode))
        .route("/decode", get(handlers::get_decode))
        .route("/grid", get(handlers::grid_info))
        .route("/health", get(handlers::health_check))
}

// Re-export commonly used types for convenience
pub use handlers::{
    BoundsResponse, DecodeQuery, DecodeResponse, EncodeQuery, EncodeResponse, ErrorResponse,
    GridInfoResponse, HealthResponse,
};
