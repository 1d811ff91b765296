//! Integration tests for the HTTP API.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

fn create_test_server() -> TestServer {
    TestServer::new(gridpin_service::router()).unwrap()
}

#[tokio::test]
async fn test_encode_endpoint_success() {
    let server = create_test_server();

    let response = server.get("/encode?latitude=28.6139&longitude=77.2090").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["code"], "39J-438-TJC7");
    assert_eq!(json["latitude"], 28.6139);
    assert_eq!(json["longitude"], 77.209);
}

#[tokio::test]
async fn test_encode_endpoint_invalid_latitude() {
    let server = create_test_server();

    // Latitude north of the root region
    let response = server.get("/encode?latitude=51.5&longitude=77.0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "INVALID_LATITUDE");
    assert!(json["error"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn test_encode_endpoint_invalid_longitude() {
    let server = create_test_server();

    // Longitude west of the root region
    let response = server.get("/encode?latitude=28.0&longitude=0.0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "INVALID_LONGITUDE");
    assert!(json["error"].as_str().unwrap().contains("longitude"));
}

#[tokio::test]
async fn test_encode_endpoint_missing_params() {
    let server = create_test_server();

    // Missing longitude
    let response = server.get("/encode?latitude=28.6139").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Missing latitude
    let response = server.get("/encode?longitude=77.2090").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Non-numeric latitude
    let response = server.get("/encode?latitude=abc&longitude=77.2090").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // No parameters
    let response = server.get("/encode").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_decode_endpoint_success() {
    let server = create_test_server();

    let response = server.get("/decode?code=39J-49L-L8T4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["code"], "39J-49L-L8T4");

    let latitude = json["latitude"].as_f64().unwrap();
    let longitude = json["longitude"].as_f64().unwrap();
    assert!((latitude - 28.622788).abs() < 0.001);
    assert!((longitude - 77.213033).abs() < 0.001);

    // Bounds are returned so callers can reason about precision
    let bounds = &json["bounds"];
    assert!(bounds["min_lat"].as_f64().unwrap() < latitude);
    assert!(bounds["max_lat"].as_f64().unwrap() > latitude);
    assert!(bounds["min_lon"].as_f64().unwrap() < longitude);
    assert!(bounds["max_lon"].as_f64().unwrap() > longitude);
}

#[tokio::test]
async fn test_decode_endpoint_invalid_length() {
    let server = create_test_server();

    let response = server.get("/decode?code=39J-49L").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "INVALID_CODE_LENGTH");
}

#[tokio::test]
async fn test_decode_endpoint_invalid_symbol() {
    let server = create_test_server();

    // 'A' is not part of the alphabet
    let response = server.get("/decode?code=39A-49L-L8T4").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "INVALID_CODE_SYMBOL");
}

#[tokio::test]
async fn test_decode_endpoint_blank_code() {
    let server = create_test_server();

    let response = server.get("/decode?code=").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "MISSING_CODE");

    let response = server.get("/decode?code=%20%20").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["code"], "MISSING_CODE");

    // Missing entirely is rejected by the extractor
    let response = server.get("/decode").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_decode_endpoint_geojson() {
    let server = create_test_server();

    let response = server.get("/decode?code=39J-49L-L8T4&geojson=true").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["type"], "Feature");
    assert_eq!(json["geometry"]["type"], "Polygon");
    assert_eq!(json["properties"]["code"], "39J-49L-L8T4");

    // Closed 5-point ring around the decoded cell
    let ring = json["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);

    let bbox = json["bbox"].as_array().unwrap();
    assert_eq!(bbox.len(), 4);
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let server = create_test_server();

    let response = server.get("/encode?latitude=18.921984&longitude=72.834654").await;
    response.assert_status_ok();
    let encoded: Value = response.json();
    let code = encoded["code"].as_str().unwrap();

    let response = server.get(&format!("/decode?code={}", code)).await;
    response.assert_status_ok();
    let decoded: Value = response.json();

    let latitude = decoded["latitude"].as_f64().unwrap();
    let longitude = decoded["longitude"].as_f64().unwrap();
    let half_lat = (decoded["bounds"]["max_lat"].as_f64().unwrap()
        - decoded["bounds"]["min_lat"].as_f64().unwrap())
        / 2.0;
    let half_lon = (decoded["bounds"]["max_lon"].as_f64().unwrap()
        - decoded["bounds"]["min_lon"].as_f64().unwrap())
        / 2.0;

    assert!((latitude - 18.921984).abs() <= half_lat);
    assert!((longitude - 72.834654).abs() <= half_lon);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_grid_info_endpoint() {
    let server = create_test_server();

    let response = server.get("/grid").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["min_lat"], 2.5);
    assert_eq!(json["max_lat"], 38.5);
    assert_eq!(json["min_lon"], 63.5);
    assert_eq!(json["max_lon"], 99.5);
    assert_eq!(json["levels"], 10);
    assert_eq!(json["alphabet"].as_str().unwrap().len(), 16);
    assert_eq!(json["separator"], "-");
    assert!(json["cell_lat_span"].as_f64().unwrap() > 0.0);
}
