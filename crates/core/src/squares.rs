//! The national grid square table.
//!
//! Each two-letter square code maps to the tile offset of its south-west
//! corner from the false origin, measured in whole squares (100 km). The
//! table is closed: codes outside it are rejected at resolution time.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::{GridError, Result};

/// Offset of a square from the grid origin, in units of the square edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileOffset {
    /// Squares east of the origin.
    pub x: u32,
    /// Squares north of the origin.
    pub y: u32,
}

/// Square codes with their `(x, y)` tile offsets.
pub const NATIONAL_GRID_SQUARES: [(&str, u32, u32); 55] = [
    ("HP", 4, 12),
    ("HT", 3, 11),
    ("HU", 4, 11),
    ("HW", 1, 10),
    ("HX", 2, 10),
    ("HY", 3, 10),
    ("HZ", 4, 10),
    ("NA", 0, 9),
    ("NB", 1, 9),
    ("NC", 2, 9),
    ("ND", 3, 9),
    ("NF", 0, 8),
    ("NG", 1, 8),
    ("NH", 2, 8),
    ("NJ", 3, 8),
    ("NK", 4, 8),
    ("NL", 0, 7),
    ("NM", 1, 7),
    ("NN", 2, 7),
    ("NO", 3, 7),
    ("NR", 1, 6),
    ("NS", 2, 6),
    ("NT", 3, 6),
    ("NU", 4, 6),
    ("NW", 1, 5),
    ("NX", 2, 5),
    ("NY", 3, 5),
    ("NZ", 4, 5),
    ("OV", 5, 5),
    ("SD", 3, 4),
    ("SE", 4, 4),
    ("TA", 5, 4),
    ("SH", 2, 3),
    ("SJ", 3, 3),
    ("SK", 4, 3),
    ("TF", 5, 3),
    ("TG", 6, 3),
    ("SM", 1, 2),
    ("SN", 2, 2),
    ("SO", 3, 2),
    ("SP", 4, 2),
    ("TL", 5, 2),
    ("TM", 6, 2),
    ("SR", 1, 1),
    ("SS", 2, 1),
    ("ST", 3, 1),
    ("SU", 4, 1),
    ("TQ", 5, 1),
    ("TR", 6, 1),
    ("SV", 0, 0),
    ("SW", 1, 0),
    ("SX", 2, 0),
    ("SY", 3, 0),
    ("SZ", 4, 0),
    ("TV", 5, 0),
];

static SQUARE_OFFSETS: LazyLock<FxHashMap<&'static str, TileOffset>> = LazyLock::new(|| {
    NATIONAL_GRID_SQUARES
        .iter()
        .map(|&(code, x, y)| (code, TileOffset { x, y }))
        .collect()
});

static SORTED_CODES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut codes: Vec<&'static str> = NATIONAL_GRID_SQUARES.iter().map(|e| e.0).collect();
    codes.sort_unstable();
    codes
});

/// Looks up the tile offset of a square code. Codes are case-sensitive.
pub fn lookup(code: &str) -> Option<TileOffset> {
    SQUARE_OFFSETS.get(code).copied()
}

/// Fails with [`GridError::UnknownSquare`] unless `code` is in the table.
pub fn validate_square(code: &str) -> Result<()> {
    lookup(code)
        .map(|_| ())
        .ok_or_else(|| GridError::UnknownSquare(code.to_string()))
}

/// All square codes in alphabetical order.
pub fn codes() -> &'static [&'static str] {
    &SORTED_CODES
}
