use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct DecodeResponse {
    code: String,
    lat: f64,
    lon: f64,
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
}

pub fn run(code: String, json: bool, geojson: bool) -> Result<()> {
    let pin = gridpin::decode(&code).context("Failed to decode code")?;

    if json {
        let response = DecodeResponse {
            code,
            lat: pin.latitude,
            lon: pin.longitude,
            min_lat: pin.bounds.min_lat,
            min_lon: pin.bounds.min_lon,
            max_lat: pin.bounds.max_lat,
            max_lon: pin.bounds.max_lon,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if geojson {
        let feature = gridpin::geojson::decoded_to_feature(&code, &pin);
        println!("{}", serde_json::to_string(&feature)?);
    } else {
        println!("{:.6},{:.6}", pin.latitude, pin.longitude);
    }

    Ok(())
}
