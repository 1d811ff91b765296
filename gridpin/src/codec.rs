//! Grid code encoding and decoding.
//!
//! This module provides the two core operations of the library: [`encode`],
//! which maps a coordinate inside the root region to a fixed-length code, and
//! [`decode`], which maps a code back to the bounding box it pins down plus
//! that box's midpoint.
//!
//! Both operations are pure functions over the constants in [`crate::grid`]:
//! no I/O, no caching, no shared mutable state. They are safe to call from
//! any number of threads without coordination.

use crate::error::{Axis, GridPinError, Result};
use crate::grid::{self, BoundingBox, LEVELS, SEPARATOR, SEPARATOR_AFTER};

/// The result of decoding a grid code.
///
/// A code identifies a cell, not a point, so the decoded coordinate is the
/// cell midpoint and the cell itself is returned alongside it. Callers that
/// care about precision should reason over `bounds` rather than treating the
/// midpoint as exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedPin {
    /// Midpoint latitude of the decoded cell.
    pub latitude: f64,
    /// Midpoint longitude of the decoded cell.
    pub longitude: f64,
    /// The final-level cell the code identifies.
    pub bounds: BoundingBox,
}

/// Encode a coordinate into a grid code.
///
/// The coordinate must lie inside the root region (latitude 2.5 to 38.5,
/// longitude 63.5 to 99.5). The box is subdivided 4×4 ten times, emitting one
/// symbol per level, with a `-` separator after the 3rd and 6th symbols.
///
/// # Arguments
///
/// * `lat` - Latitude in decimal degrees
/// * `lon` - Longitude in decimal degrees
///
/// # Returns
///
/// A 12-character code: 10 symbols plus 2 separators (e.g. `39J-438-TJC7`).
/// Identical input always yields an identical code.
///
/// # Errors
///
/// Returns [`GridPinError::CoordinateOutOfRange`] naming the offending axis
/// if the coordinate lies outside the root region. Non-finite values are
/// rejected the same way.
///
/// # Examples
///
/// ```
/// use gridpin::encode;
///
/// let code = encode(28.6139, 77.2090)?;
/// assert_eq!(code.len(), 12);
/// # Ok::<(), gridpin::GridPinError>(())
/// ```
pub fn encode(lat: f64, lon: f64) -> Result<String> {
    let root = BoundingBox::root();

    if !(root.min_lat..=root.max_lat).contains(&lat) {
        return Err(GridPinError::CoordinateOutOfRange {
            axis: Axis::Latitude,
            value: lat,
            min: root.min_lat,
            max: root.max_lat,
        });
    }
    if !(root.min_lon..=root.max_lon).contains(&lon) {
        return Err(GridPinError::CoordinateOutOfRange {
            axis: Axis::Longitude,
            value: lon,
            min: root.min_lon,
            max: root.max_lon,
        });
    }

    let mut code = String::with_capacity(LEVELS + SEPARATOR_AFTER.len());
    let mut bounds = root;

    for level in 1..=LEVELS {
        let (row, col) = bounds.cell_index(lat, lon);
        code.push(grid::symbol_at(row, col));
        if SEPARATOR_AFTER.contains(&level) {
            code.push(SEPARATOR);
        }
        bounds = bounds.cell(row, col);
    }

    Ok(code)
}

/// Decode a grid code back to a coordinate and its bounding box.
///
/// Separators are stripped and symbols uppercased before validation, so
/// `39j-438-tjc7`, `39J438TJC7`, and `39J-438-TJC7` all decode identically.
///
/// # Arguments
///
/// * `code` - The code to decode, with or without separators
///
/// # Returns
///
/// The [`DecodedPin`] holding the final-level cell and its midpoint.
///
/// # Errors
///
/// Returns [`GridPinError::InvalidCodeLength`] if the code does not have
/// exactly 10 symbols after separator removal, or
/// [`GridPinError::InvalidCodeSymbol`] if any character is outside the
/// 16-symbol alphabet. The two kinds are reported separately.
///
/// # Examples
///
/// ```
/// use gridpin::decode;
///
/// let pin = decode("39J-49L-L8T4")?;
/// assert!((pin.latitude - 28.6228).abs() < 0.001);
/// assert!((pin.longitude - 77.2130).abs() < 0.001);
/// # Ok::<(), gridpin::GridPinError>(())
/// ```
pub fn decode(code: &str) -> Result<DecodedPin> {
    let symbols: Vec<char> = code
        .chars()
        .filter(|c| *c != SEPARATOR)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if symbols.len() != LEVELS {
        return Err(GridPinError::InvalidCodeLength {
            expected: LEVELS,
            actual: symbols.len(),
        });
    }

    let mut bounds = BoundingBox::root();
    for &symbol in &symbols {
        let (row, col) =
            grid::symbol_position(symbol).ok_or(GridPinError::InvalidCodeSymbol { symbol })?;
        bounds = bounds.cell(row, col);
    }

    let (latitude, longitude) = bounds.center();
    Ok(DecodedPin {
        latitude,
        longitude,
        bounds,
    })
}
