//! Basic example demonstrating gridpin library usage.
//!
//! Run with: cargo run --example basic

use gridpin::{decode, encode, GridPinError};

fn main() -> Result<(), GridPinError> {
    // Encode some well-known locations
    let locations = [
        ("India Gate, New Delhi", 28.612894, 77.229446),
        ("Gateway of India, Mumbai", 18.921984, 72.834654),
        ("Taj Mahal, Agra", 27.175015, 78.042155),
        ("Charminar, Hyderabad", 17.361564, 78.474665),
    ];

    println!("Grid codes:");
    println!("{:-<60}", "");

    for (name, lat, lon) in &locations {
        let code = encode(*lat, *lon)?;
        println!("{:<28} {}", name, code);
    }

    // Decode one back: the result is a cell, not a point
    let code = encode(28.612894, 77.229446)?;
    let pin = decode(&code)?;

    println!();
    println!("Decoded {}:", code);
    println!("  midpoint:  {:.6}, {:.6}", pin.latitude, pin.longitude);
    println!(
        "  cell:      {:.6}..{:.6} lat, {:.6}..{:.6} lon",
        pin.bounds.min_lat, pin.bounds.max_lat, pin.bounds.min_lon, pin.bounds.max_lon
    );

    // Points outside the root region are unrepresentable
    match encode(51.5007, -0.1246) {
        Err(e) => println!("\nLondon is not encodable: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
