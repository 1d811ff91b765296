//! Error types for the gridpin library.

use std::fmt;

use thiserror::Error;

/// The coordinate axis a range violation was detected on.
///
/// Adapters map each axis to its own error code, so the axis is carried as
/// data rather than baked into a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North-south axis (degrees latitude).
    Latitude,
    /// East-west axis (degrees longitude).
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Errors that can occur when encoding or decoding grid codes.
#[derive(Error, Debug)]
pub enum GridPinError {
    /// A coordinate lies outside the root bounding box.
    #[error("{axis} out of range: {value} (valid: {min} to {max})")]
    CoordinateOutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A code has the wrong number of symbols after separator removal.
    #[error("invalid code length: {actual} symbols (expected {expected})")]
    InvalidCodeLength { expected: usize, actual: usize },

    /// A code contains a character outside the symbol alphabet.
    #[error("invalid code symbol: {symbol:?}")]
    InvalidCodeSymbol { symbol: char },
}

/// Result type alias using [`GridPinError`].
pub type Result<T> = std::result::Result<T, GridPinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridPinError::CoordinateOutOfRange {
            axis: Axis::Latitude,
            value: 45.0,
            min: 2.5,
            max: 38.5,
        };
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("45"));

        let err = GridPinError::InvalidCodeLength {
            expected: 10,
            actual: 7,
        };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("10"));

        let err = GridPinError::InvalidCodeSymbol { symbol: 'A' };
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Latitude.to_string(), "latitude");
        assert_eq!(Axis::Longitude.to_string(), "longitude");
    }
}
