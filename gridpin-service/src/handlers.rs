//! HTTP request handlers for the geocoding service.

use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use gridpin::{Axis, BoundingBox, DecodedPin, GridPinError};

/// Query parameters for the encode endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct EncodeQuery {
    /// Latitude in decimal degrees (2.5 to 38.5).
    pub latitude: f64,
    /// Longitude in decimal degrees (63.5 to 99.5).
    pub longitude: f64,
}

/// Query parameters for the decode endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DecodeQuery {
    /// The grid code to decode, with or without separators.
    pub code: String,
    /// Whether to return the result as a GeoJSON Feature of the decoded
    /// cell instead of the default JSON shape.
    #[serde(default)]
    pub geojson: bool,
}

/// Successful encode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeResponse {
    /// The generated grid code.
    pub code: String,
    /// Latitude queried.
    pub latitude: f64,
    /// Longitude queried.
    pub longitude: f64,
}

/// Bounding box of a decoded cell.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoundsResponse {
    /// Southern boundary latitude.
    pub min_lat: f64,
    /// Western boundary longitude.
    pub min_lon: f64,
    /// Northern boundary latitude.
    pub max_lat: f64,
    /// Eastern boundary longitude.
    pub max_lon: f64,
}

impl From<BoundingBox> for BoundsResponse {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            min_lat: bounds.min_lat,
            min_lon: bounds.min_lon,
            max_lat: bounds.max_lat,
            max_lon: bounds.max_lon,
        }
    }
}

/// Successful decode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecodeResponse {
    /// The code that was decoded.
    pub code: String,
    /// Midpoint latitude of the decoded cell.
    pub latitude: f64,
    /// Midpoint longitude of the decoded cell.
    pub longitude: f64,
    /// The decoded cell itself, so callers can reason about precision.
    pub bounds: BoundsResponse,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Grid description response.
#[derive(Debug, Serialize, ToSchema)]
pub struct GridInfoResponse {
    /// Southern boundary of the root region.
    pub min_lat: f64,
    /// Western boundary of the root region.
    pub min_lon: f64,
    /// Northern boundary of the root region.
    pub max_lat: f64,
    /// Eastern boundary of the root region.
    pub max_lon: f64,
    /// Number of subdivision levels.
    pub levels: usize,
    /// The 16-symbol alphabet in row-major grid order.
    pub alphabet: String,
    /// Separator character used in codes.
    pub separator: String,
    /// Latitude extent of a finest-level cell, in degrees.
    pub cell_lat_span: f64,
    /// Longitude extent of a finest-level cell, in degrees.
    pub cell_lon_span: f64,
}

/// Encode a coordinate into a grid code.
///
/// # Query Parameters
///
/// - `latitude`: Latitude in decimal degrees (2.5 to 38.5)
/// - `longitude`: Longitude in decimal degrees (63.5 to 99.5)
///
/// # Returns
///
/// - `200 OK` with the generated code
/// - `400 Bad Request` if a coordinate is outside the root region
#[utoipa::path(
    get,
    path = "/encode",
    params(EncodeQuery),
    responses(
        (status = 200, description = "Code generated", body = EncodeResponse),
        (status = 400, description = "Coordinate outside the root region", body = ErrorResponse)
    ),
    tag = "codec"
)]
#[axum::debug_handler]
pub async fn get_encode(Query(query): Query<EncodeQuery>) -> impl IntoResponse {
    tracing::debug!(
        latitude = query.latitude,
        longitude = query.longitude,
        "Encode query"
    );

    match gridpin::encode(query.latitude, query.longitude) {
        Ok(code) => {
            tracing::info!(
                latitude = query.latitude,
                longitude = query.longitude,
                code = %code,
                "Code generated"
            );
            (
                StatusCode::OK,
                Json(EncodeResponse {
                    code,
                    latitude: query.latitude,
                    longitude: query.longitude,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Decode a grid code back to a coordinate and bounding box.
///
/// # Query Parameters
///
/// - `code`: The code to decode, with or without separators
/// - `geojson`: Optional boolean to return a GeoJSON Feature (default: false)
///
/// # Returns
///
/// - `200 OK` with the cell midpoint and bounds
/// - `400 Bad Request` if the code is missing, has the wrong length, or
///   contains a symbol outside the alphabet
#[utoipa::path(
    get,
    path = "/decode",
    params(DecodeQuery),
    responses(
        (status = 200, description = "Code decoded", body = DecodeResponse),
        (status = 400, description = "Invalid code", body = ErrorResponse)
    ),
    tag = "codec"
)]
#[axum::debug_handler]
pub async fn get_decode(Query(query): Query<DecodeQuery>) -> impl IntoResponse {
    tracing::debug!(code = %query.code, geojson = query.geojson, "Decode query");

    // Blank input never reaches the decoder
    if query.code.trim().is_empty() {
        tracing::warn!("Decode query with empty code");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                code: "MISSING_CODE".to_string(),
                error: "code must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    match gridpin::decode(&query.code) {
        Ok(pin) => {
            tracing::info!(
                code = %query.code,
                latitude = pin.latitude,
                longitude = pin.longitude,
                "Code decoded"
            );
            if query.geojson {
                geojson_response(&query.code, &pin)
            } else {
                (
                    StatusCode::OK,
                    Json(DecodeResponse {
                        code: query.code,
                        latitude: pin.latitude,
                        longitude: pin.longitude,
                        bounds: pin.bounds.into(),
                    }),
                )
                    .into_response()
            }
        }
        Err(e) => error_response(e),
    }
}

fn geojson_response(code: &str, pin: &DecodedPin) -> axum::response::Response {
    let feature = gridpin::geojson::decoded_to_feature(code, pin);
    (StatusCode::OK, Json(feature)).into_response()
}

/// Map a core error to a response with a stable machine-readable code.
///
/// Each error kind keeps its own code; kinds are never collapsed.
fn error_response(e: GridPinError) -> axum::response::Response {
    let code = match &e {
        GridPinError::CoordinateOutOfRange {
            axis: Axis::Latitude,
            ..
        } => "INVALID_LATITUDE",
        GridPinError::CoordinateOutOfRange {
            axis: Axis::Longitude,
            ..
        } => "INVALID_LONGITUDE",
        GridPinError::InvalidCodeLength { .. } => "INVALID_CODE_LENGTH",
        GridPinError::InvalidCodeSymbol { .. } => "INVALID_CODE_SYMBOL",
    };

    tracing::warn!(code = code, error = %e, "Query failed");

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            code: code.to_string(),
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Describe the grid the service encodes against.
///
/// Returns the root region, level count, alphabet, and finest cell extent.
#[utoipa::path(
    get,
    path = "/grid",
    responses((status = 200, description = "Grid description", body = GridInfoResponse)),
    tag = "system"
)]
pub async fn grid_info() -> Json<GridInfoResponse> {
    let root = BoundingBox::root();
    let (cell_lat_span, cell_lon_span) = gridpin::grid::level_span(gridpin::LEVELS);

    Json(GridInfoResponse {
        min_lat: root.min_lat,
        min_lon: root.min_lon,
        max_lat: root.max_lat,
        max_lon: root.max_lon,
        levels: gridpin::LEVELS,
        alphabet: gridpin::grid::alphabet(),
        separator: gridpin::SEPARATOR.to_string(),
        cell_lat_span,
        cell_lon_span,
    })
}
