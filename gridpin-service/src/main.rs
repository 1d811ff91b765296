//! Gridpin Service - HTTP microservice for hierarchical grid geocoding.
//!
//! A small REST API over the pure encode/decode core.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GRIDPIN_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /encode?latitude=X&longitude=Y` - Encode a coordinate into a code
//! - `GET /decode?code=X` - Decode a code into a coordinate and bounding box
//! - `GET /grid` - Describe the grid (root region, levels, alphabet)
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;

use gridpin_service::handlers;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the gridpin service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gridpin Geocoding Service",
        version = "0.1.0",
        description = "REST API for hierarchical 4x4 grid geocoding.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::get_encode,
        handlers::get_decode,
        handlers::grid_info,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::EncodeResponse,
            handlers::DecodeResponse,
            handlers::BoundsResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            handlers::GridInfoResponse,
        )
    ),
    tags(
        (name = "codec", description = "Encode and decode endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridpin_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("GRIDPIN_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    tracing::info!(port = port, "Starting gridpin service");

    let app = gridpin_service::router()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
