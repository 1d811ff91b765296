//! Show how each subdivision level refines positional precision.
//!
//! Run with: cargo run --example resolution

use gridpin::grid::{level_span, LEVELS};

// Meters per degree of latitude, good enough for a resolution table.
const METERS_PER_DEGREE: f64 = 111_320.0;

fn main() {
    println!("{:<7} {:>16} {:>16}", "LEVEL", "CELL (DEG)", "CELL (APPROX)");
    println!("{}", "-".repeat(41));

    for level in 1..=LEVELS {
        let (lat_span, _) = level_span(level);
        let meters = lat_span * METERS_PER_DEGREE;

        let approx = if meters >= 1000.0 {
            format!("~{:.0} km", meters / 1000.0)
        } else {
            format!("~{:.1} m", meters)
        };

        println!("{:<7} {:>16.10} {:>16}", level, lat_span, approx);
    }
}
