use anyhow::Result;
use gridpin::grid::{
    level_span, LEVELS, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, SEPARATOR_AFTER, SYMBOL_GRID,
};

// Meters per degree of latitude, good enough for a resolution table.
const METERS_PER_DEGREE: f64 = 111_320.0;

pub fn run() -> Result<()> {
    println!(
        "Region: {}°N to {}°N, {}°E to {}°E",
        MIN_LAT, MAX_LAT, MIN_LON, MAX_LON
    );
    println!("Levels: {}", LEVELS);
    println!(
        "Separator: '-' after symbols {} and {}",
        SEPARATOR_AFTER[0], SEPARATOR_AFTER[1]
    );
    println!();

    println!("Symbol grid (row 0 = north, col 0 = west):");
    for row in SYMBOL_GRID {
        print!(" ");
        for symbol in row {
            print!(" {}", symbol);
        }
        println!();
    }
    println!();

    println!("{:<7} {:>16} {:>14}", "LEVEL", "CELL (DEG)", "CELL (APPROX)");
    println!("{}", "-".repeat(39));

    for level in 1..=LEVELS {
        let (lat_span, _) = level_span(level);
        println!(
            "{:<7} {:>16.10} {:>14}",
            level,
            lat_span,
            format_distance(lat_span * METERS_PER_DEGREE)
        );
    }

    Ok(())
}

fn format_distance(meters: f64) -> String {
    const KM: f64 = 1000.0;

    if meters >= KM {
        format!("~{:.0} km", meters / KM)
    } else {
        format!("~{:.1} m", meters)
    }
}
