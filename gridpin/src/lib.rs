//! # gridpin - Hierarchical Grid Geocoding Library
//!
//! Maps geographic coordinates within a fixed root region to fixed-length
//! alphanumeric codes, and back, via hierarchical 4×4 grid subdivision.
//!
//! ## Features
//!
//! - **Pure**: Encoding and decoding are side-effect-free functions over
//!   compile-time constants
//! - **Deterministic**: Identical input always yields an identical code
//! - **Precise**: 10 subdivision levels pin a location to a cell a few
//!   meters across
//! - **Thread-safe**: No shared mutable state, safe for unbounded concurrent
//!   callers
//!
//! ## Quick Start
//!
//! ```
//! use gridpin::{encode, decode};
//!
//! // Encode a coordinate near New Delhi
//! let code = encode(28.6139, 77.2090)?;
//! assert_eq!(code, "39J-438-TJC7");
//!
//! // Decode it back to the cell midpoint and bounding box
//! let pin = decode(&code)?;
//! assert!((pin.latitude - 28.6139).abs() < 0.0001);
//! assert!((pin.longitude - 77.2090).abs() < 0.0001);
//! # Ok::<(), gridpin::GridPinError>(())
//! ```
//!
//! ## Code Format
//!
//! A code is 10 symbols drawn from a 16-character alphabet, one per
//! subdivision level, with `-` separators after the 3rd and 6th symbols for
//! readability (e.g. `39J-438-TJC7`). Separators carry no information and
//! are ignored when decoding; symbol case is likewise ignored.
//!
//! The root region spans latitude 2.5° to 38.5° and longitude 63.5° to
//! 99.5°. Each level subdivides the current cell into a 4×4 grid, so the
//! final cell extent is the root extent divided by 4^10 per axis — roughly
//! 3.8 m × 3.8 m on the ground.

pub mod codec;
pub mod error;
pub mod grid;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use codec::{decode, encode, DecodedPin};
pub use error::{Axis, GridPinError, Result};
pub use grid::{BoundingBox, LEVELS, SEPARATOR};
