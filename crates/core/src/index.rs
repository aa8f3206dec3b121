//! Square and sub-square lookup by region.
//!
//! The index holds the bounds of every square and of its 100 sub-squares,
//! computed once from the square table. A query returns, per overlapped
//! square, the ascending sub-square numbers that overlap the region.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::geometry::{Bounds, HasBBox, Plane};
use crate::gridref::SubSquare;
use crate::resolve::{self, SQUARE_SIZE, SUB_SQUARE_SIZE};
use crate::squares;

/// Sub-square numbers per lowercase square code.
pub type SubSquareHits = BTreeMap<SmolStr, Vec<u8>>;

struct IndexedSquare {
    code: &'static str,
    bounds: Bounds,
    sub_squares: [Bounds; 100],
}

impl HasBBox for IndexedSquare {
    fn bbox(&self) -> Bounds {
        self.bounds
    }
}

impl IndexedSquare {
    fn new(code: &'static str, origin: (f64, f64)) -> Self {
        let bounds = Bounds::from_origin(origin, SQUARE_SIZE);
        let sub_squares = std::array::from_fn(|n| {
            let (east, north) = (n / 10, n % 10);
            let sub_origin = (
                bounds.xmin + east as f64 * SUB_SQUARE_SIZE,
                bounds.ymin + north as f64 * SUB_SQUARE_SIZE,
            );
            Bounds::from_origin(sub_origin, SUB_SQUARE_SIZE)
        });
        Self {
            code,
            bounds,
            sub_squares,
        }
    }
}

/// Precomputed bounds of every square and sub-square in the table.
///
/// Read-only after construction and safe to share between threads.
pub struct SpatialIndex {
    plane: Plane<IndexedSquare>,
}

static GLOBAL_INDEX: LazyLock<SpatialIndex> = LazyLock::new(SpatialIndex::new);

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex {
    /// Builds the index from the square table.
    pub fn new() -> Self {
        let squares: Vec<IndexedSquare> = squares::codes()
            .iter()
            .filter_map(|&code| {
                let origin = resolve::square_origin(code).ok()?;
                Some(IndexedSquare::new(code, origin))
            })
            .collect();
        debug!(
            squares = squares.len(),
            sub_squares = squares.len() * 100,
            "built grid square index"
        );
        Self {
            plane: Plane::new(squares),
        }
    }

    /// The process-wide index, built on first use.
    pub fn global() -> &'static SpatialIndex {
        &GLOBAL_INDEX
    }

    /// Number of indexed squares.
    pub fn len(&self) -> usize {
        self.plane.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plane.is_empty()
    }

    fn square(&self, code: &str) -> Option<&IndexedSquare> {
        self.plane.iter().find(|sq| sq.code == code)
    }

    /// Bounds of a square by its (uppercase) code.
    pub fn square_bounds(&self, code: &str) -> Option<Bounds> {
        self.square(code).map(|sq| sq.bounds)
    }

    /// Bounds of sub-square `number` (`0..=99`) of a square.
    pub fn sub_square_bounds(&self, code: &str, number: u8) -> Option<Bounds> {
        let sub = SubSquare::from_number(number)?;
        self.square(code)
            .map(|sq| sq.sub_squares[usize::from(sub.number())])
    }

    /// Finds every square and sub-square that overlaps `region`.
    ///
    /// Squares without an overlapping sub-square are left out of the result.
    pub fn query(&self, region: &Bounds) -> SubSquareHits {
        let mut hits = SubSquareHits::new();
        for square in self.plane.find(region) {
            let numbers: Vec<u8> = square
                .sub_squares
                .iter()
                .zip(0u8..)
                .filter(|(bounds, _)| bounds.intersects(region))
                .map(|(_, n)| n)
                .collect();
            if !numbers.is_empty() {
                hits.insert(SmolStr::new(square.code.to_ascii_lowercase()), numbers);
            }
        }
        trace!(?region, squares = hits.len(), "grid square query");
        hits
    }
}

/// Queries the process-wide index.
pub fn get_sub_squares(region: &Bounds) -> SubSquareHits {
    SpatialIndex::global().query(region)
}
