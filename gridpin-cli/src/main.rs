use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Hierarchical grid geocoding CLI tool
#[derive(Parser)]
#[command(name = "gridpin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate into a grid code
    Encode {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,

        /// Output result as a GeoJSON Point feature
        #[arg(short, long, conflicts_with = "json")]
        geojson: bool,
    },

    /// Decode a grid code into a coordinate and bounding box
    Decode {
        /// The code to decode, with or without separators
        code: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,

        /// Output result as a GeoJSON Polygon feature
        #[arg(short, long, conflicts_with = "json")]
        geojson: bool,
    },

    /// Process coordinates or codes from a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (derived from the input name if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Decode a code column instead of encoding coordinate columns
        #[arg(short, long)]
        decode: bool,

        /// Column name for latitude
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "lon")]
        lon_col: String,

        /// Column name for the code (decode mode)
        #[arg(long, default_value = "code")]
        code_col: String,
    },

    /// Display the grid layout and per-level resolution
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            lat,
            lon,
            json,
            geojson,
        } => commands::encode::run(lat, lon, json, geojson),
        Commands::Decode {
            code,
            json,
            geojson,
        } => commands::decode::run(code, json, geojson),
        Commands::Batch {
            input,
            output,
            decode,
            lat_col,
            lon_col,
            code_col,
        } => commands::batch::run(input, output, decode, lat_col, lon_col, code_col),
        Commands::Info => commands::info::run(),
    }
}
