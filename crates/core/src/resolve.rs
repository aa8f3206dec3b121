//! Resolution of grid references to cells in projected coordinates.
//!
//! A reference resolves to the bounding box of the most specific cell it
//! names. The cell's centre, not its south-west corner, is the coordinate
//! that represents the reference.

use tracing::debug;

use crate::error::{GridError, Result};
use crate::geometry::{Bounds, Point};
use crate::gridref::{self, GridRef, SubSquare};
use crate::squares;

/// Edge of a grid square (100 km).
pub const SQUARE_SIZE: f64 = 100_000.0;
/// Edge of a sub-square (10 km).
pub const SUB_SQUARE_SIZE: f64 = SQUARE_SIZE / 10.0;
/// Edge of a quadrant (5 km).
pub const QUADRANT_SIZE: f64 = SUB_SQUARE_SIZE / 2.0;

/// The three nested granularities a reference can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    Square,
    SubSquare,
    Quadrant,
}

impl Precision {
    /// Cell edge length at this precision.
    pub fn cell_size(self) -> f64 {
        match self {
            Precision::Square => SQUARE_SIZE,
            Precision::SubSquare => SUB_SQUARE_SIZE,
            Precision::Quadrant => QUADRANT_SIZE,
        }
    }
}

/// The cell a reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub precision: Precision,
    pub bounds: Bounds,
    pub center: Point,
}

impl GridCell {
    fn at(origin: Point, precision: Precision) -> Self {
        let bounds = Bounds::from_origin(origin, precision.cell_size());
        Self {
            precision,
            bounds,
            center: bounds.center(),
        }
    }
}

/// South-west corner of a square.
pub fn square_origin(code: &str) -> Result<Point> {
    let tile = squares::lookup(code).ok_or_else(|| GridError::UnknownSquare(code.to_string()))?;
    Ok((
        f64::from(tile.x) * SQUARE_SIZE,
        f64::from(tile.y) * SQUARE_SIZE,
    ))
}

fn sub_square_origin(base: Point, sub: SubSquare) -> Point {
    (
        base.0 + f64::from(sub.east()) * SUB_SQUARE_SIZE,
        base.1 + f64::from(sub.north()) * SUB_SQUARE_SIZE,
    )
}

/// Resolves a structured reference to its cell.
///
/// The quadrant wins over the sub-square, which wins over the square.
pub fn resolve(gridref: &GridRef) -> Result<GridCell> {
    let base = square_origin(gridref.square())
        .inspect_err(|e| debug!(reference = %gridref, error = %e, "cannot resolve grid reference"))?;

    let cell = match (gridref.sub_square(), gridref.quadrant()) {
        (Some(sub), Some(quadrant)) => {
            let (x, y) = sub_square_origin(base, sub);
            let (dx, dy) = quadrant.steps();
            let origin = (
                x + f64::from(dx) * QUADRANT_SIZE,
                y + f64::from(dy) * QUADRANT_SIZE,
            );
            GridCell::at(origin, Precision::Quadrant)
        }
        (Some(sub), None) => GridCell::at(sub_square_origin(base, sub), Precision::SubSquare),
        _ => GridCell::at(base, Precision::Square),
    };
    Ok(cell)
}

/// Parses and resolves reference text, returning the cell centre as (east, north).
pub fn grid_east_north(text: &str) -> Result<Point> {
    let gridref = gridref::parse(text)?;
    Ok(resolve(&gridref)?.center)
}

/// Every square with its centre, in alphabetical order.
pub fn square_centres() -> impl Iterator<Item = (GridRef, Point)> {
    squares::codes().iter().filter_map(|code| {
        let gridref = GridRef::new(code);
        let cell = resolve(&gridref).ok()?;
        Some((gridref, cell.center))
    })
}

/// Every sub-square of every square with its centre, ordered by square then number.
pub fn sub_square_centres() -> impl Iterator<Item = (GridRef, Point)> {
    squares::codes().iter().flat_map(|code| {
        (0..100u8).filter_map(move |n| {
            let gridref = GridRef::new(code).with_sub_square(SubSquare::from_number(n)?);
            let cell = resolve(&gridref).ok()?;
            Some((gridref, cell.center))
        })
    })
}
