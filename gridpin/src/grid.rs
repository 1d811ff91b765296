//! Grid constants and bounding-box subdivision.
//!
//! This module holds the fixed configuration the whole scheme is defined
//! over: the root bounding box, the 4×4 symbol table, the subdivision depth,
//! and the separator rule. Everything here is a process-wide constant,
//! initialized at compile time and never mutated, so concurrent callers need
//! no synchronization.

/// Number of subdivision levels. Each level refines position 4× per axis.
pub const LEVELS: usize = 10;

/// Rows/columns per subdivision step.
pub const GRID_DIM: usize = 4;

/// Western boundary of the root region (degrees longitude).
pub const MIN_LON: f64 = 63.5;

/// Eastern boundary of the root region (degrees longitude).
pub const MAX_LON: f64 = 99.5;

/// Southern boundary of the root region (degrees latitude).
pub const MIN_LAT: f64 = 2.5;

/// Northern boundary of the root region (degrees latitude).
pub const MAX_LAT: f64 = 38.5;

/// Symbol table mapping (row, col) to an output character.
///
/// Row 0 is the northernmost latitude band, column 0 the westernmost
/// longitude band. All 16 entries are distinct; decoding uses the inverse
/// lookup via [`symbol_position`].
pub const SYMBOL_GRID: [[char; GRID_DIM]; GRID_DIM] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// Separator character inserted into codes for readability.
pub const SEPARATOR: char = '-';

/// Levels after which [`SEPARATOR`] is emitted.
pub const SEPARATOR_AFTER: [usize; 2] = [3, 6];

/// Look up the output character for a grid cell.
///
/// # Panics
///
/// Panics if `row` or `col` is outside `0..4`. Callers obtain indices from
/// [`BoundingBox::cell_index`], which clamps them.
pub fn symbol_at(row: usize, col: usize) -> char {
    SYMBOL_GRID[row][col]
}

/// Find the (row, col) position of a symbol, or `None` if the character is
/// not part of the alphabet.
pub fn symbol_position(symbol: char) -> Option<(usize, usize)> {
    for (row, symbols) in SYMBOL_GRID.iter().enumerate() {
        for (col, s) in symbols.iter().enumerate() {
            if *s == symbol {
                return Some((row, col));
            }
        }
    }
    None
}

/// The 16-character alphabet in row-major order.
pub fn alphabet() -> String {
    SYMBOL_GRID.iter().flatten().collect()
}

/// Cell extent at a given level: (latitude span, longitude span) in degrees.
///
/// Level 0 is the root box itself; each level divides both spans by 4.
pub fn level_span(level: usize) -> (f64, f64) {
    let cells = 4f64.powi(level as i32);
    ((MAX_LAT - MIN_LAT) / cells, (MAX_LON - MIN_LON) / cells)
}

/// A geographic bounding box in decimal degrees (WGS84).
///
/// Represents the region still consistent with a location estimate at the
/// current subdivision depth. Boxes are created fresh per call, narrowed once
/// per level via [`BoundingBox::cell`], and discarded on return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum latitude (southern boundary).
    pub min_lat: f64,
    /// Minimum longitude (western boundary).
    pub min_lon: f64,
    /// Maximum latitude (northern boundary).
    pub max_lat: f64,
    /// Maximum longitude (eastern boundary).
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    ///
    /// # Arguments
    ///
    /// * `min_lat` - Southern boundary latitude
    /// * `min_lon` - Western boundary longitude
    /// * `max_lat` - Northern boundary latitude
    /// * `max_lon` - Eastern boundary longitude
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// The root region the scheme is defined over.
    pub fn root() -> Self {
        Self::new(MIN_LAT, MIN_LON, MAX_LAT, MAX_LON)
    }

    /// Check whether a coordinate lies inside this box (boundaries included).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lon..=self.max_lon).contains(&lon)
    }

    /// Midpoint of the box as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Find the 4×4 sub-cell containing a point.
    ///
    /// Rows run north to south: row 0 is the top (highest latitude) band.
    /// Columns run west to east. Indices are clamped into `0..4` so a point
    /// exactly on a box boundary always selects a valid cell.
    pub fn cell_index(&self, lat: f64, lon: f64) -> (usize, usize) {
        let lat_div = self.lat_span() / GRID_DIM as f64;
        let lon_div = self.lon_span() / GRID_DIM as f64;

        let row = 3 - (((lat - self.min_lat) / lat_div).floor() as i64).clamp(0, 3);
        let col = (((lon - self.min_lon) / lon_div).floor() as i64).clamp(0, 3);

        (row as usize, col as usize)
    }

    /// Narrow this box to the sub-cell at (row, col).
    ///
    /// This is the single narrowing rule shared by the encoder and the
    /// decoder; row 0 selects the northernmost band, matching
    /// [`BoundingBox::cell_index`].
    pub fn cell(&self, row: usize, col: usize) -> BoundingBox {
        let lat_div = self.lat_span() / GRID_DIM as f64;
        let lon_div = self.lon_span() / GRID_DIM as f64;

        let min_lat = self.min_lat + lat_div * (3 - row) as f64;
        let min_lon = self.min_lon + lon_div * col as f64;

        BoundingBox {
            min_lat,
            min_lon,
            max_lat: min_lat + lat_div,
            max_lon: min_lon + lon_div,
        }
    }
}
