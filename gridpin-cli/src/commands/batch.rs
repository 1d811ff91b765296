use anyhow::{bail, Context, Result};
use geojson::JsonValue;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    decode: bool,
    lat_col: String,
    lon_col: String,
    code_col: String,
) -> Result<()> {
    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => {
            if decode {
                process_csv_decode(&input, output, &code_col)
            } else {
                process_csv_encode(&input, output, &lat_col, &lon_col)
            }
        }
        "geojson" | "json" => {
            if decode {
                bail!("Decode mode is CSV-only; GeoJSON input carries coordinates, not codes");
            }
            process_geojson(&input, output)
        }
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

fn process_csv_encode(
    input: &PathBuf,
    output: Option<PathBuf>,
    lat_col: &str,
    lon_col: &str,
) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_path = output.unwrap_or_else(|| derived_output(input, "codes"));
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("code");
    writer.write_record(&new_headers)?;

    // Process records; bad rows keep a placeholder rather than aborting
    for record in records {
        let code = record
            .get(lat_idx)
            .and_then(|s| s.parse::<f64>().ok())
            .zip(record.get(lon_idx).and_then(|s| s.parse::<f64>().ok()))
            .and_then(|(lat, lon)| gridpin::encode(lat, lon).ok())
            .unwrap_or_else(|| "invalid".to_string());

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&code);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn process_csv_decode(input: &PathBuf, output: Option<PathBuf>, code_col: &str) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let code_idx = headers
        .iter()
        .position(|h| h == code_col)
        .with_context(|| format!("Column '{}' not found in CSV", code_col))?;

    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_path = output.unwrap_or_else(|| derived_output(input, "coords"));
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("lat");
    new_headers.push("lon");
    writer.write_record(&new_headers)?;

    for record in records {
        let decoded = record
            .get(code_idx)
            .and_then(|code| gridpin::decode(code).ok());

        let (lat, lon) = match decoded {
            Some(pin) => (
                format!("{:.6}", pin.latitude),
                format!("{:.6}", pin.longitude),
            ),
            None => ("invalid".to_string(), "invalid".to_string()),
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&lat);
        new_record.push(&lon);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn process_geojson(input: &PathBuf, output: Option<PathBuf>) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let geojson: geojson::GeoJson =
        serde_json::from_reader(reader).context("Failed to parse GeoJSON")?;

    let result = match geojson {
        geojson::GeoJson::Geometry(geometry) => {
            // Bare geometries have nowhere to carry the code; wrap them
            let mut feature = geojson::Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: None,
                foreign_members: None,
            };
            add_code_to_feature(&mut feature);
            geojson::GeoJson::Feature(feature)
        }
        geojson::GeoJson::Feature(mut feature) => {
            add_code_to_feature(&mut feature);
            geojson::GeoJson::Feature(feature)
        }
        geojson::GeoJson::FeatureCollection(mut fc) => {
            let pb = progress_bar(fc.features.len() as u64)?;

            for feature in &mut fc.features {
                add_code_to_feature(feature);
                pb.inc(1);
            }
            pb.finish_with_message("done");
            geojson::GeoJson::FeatureCollection(fc)
        }
    };

    let output_path = output.unwrap_or_else(|| {
        let stem = input.file_stem().unwrap().to_string_lossy();
        input.with_file_name(format!("{}_codes.geojson", stem))
    });
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = BufWriter::new(output_file);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;

    println!("Output written to: {}", output_path.display());
    Ok(())
}

/// Attach a `code` property to a Point feature.
///
/// GeoJSON coordinates are `[lon, lat]`. Non-point geometries and points
/// outside the root region get a null code.
fn add_code_to_feature(feature: &mut geojson::Feature) {
    let code = feature.geometry.as_ref().and_then(|g| match &g.value {
        geojson::Value::Point(coord) if coord.len() >= 2 => {
            gridpin::encode(coord[1], coord[0]).ok()
        }
        _ => None,
    });

    match code {
        Some(code) => feature.set_property("code", code),
        None => feature.set_property("code", JsonValue::Null),
    }
}

fn progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn derived_output(input: &PathBuf, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap().to_string_lossy();
    input.with_file_name(format!("{}_{}.csv", stem, suffix))
}
