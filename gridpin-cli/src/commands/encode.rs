use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeResponse {
    code: String,
    lat: f64,
    lon: f64,
}

pub fn run(lat: f64, lon: f64, json: bool, geojson: bool) -> Result<()> {
    let code = gridpin::encode(lat, lon).context("Failed to encode coordinate")?;

    if json {
        let response = EncodeResponse { code, lat, lon };
        println!("{}", serde_json::to_string(&response)?);
    } else if geojson {
        let feature = gridpin::geojson::encoded_to_feature(&code, lat, lon);
        println!("{}", serde_json::to_string(&feature)?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
