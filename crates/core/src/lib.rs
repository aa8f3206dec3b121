//! natgrid - national grid references, cell resolution and square lookup.
//!
//! Text references such as `SD`, `SD91` or `SD91NW` are parsed by
//! [`gridref`], resolved to bounding boxes and centres in projected
//! easting/northing by [`resolve`], and regions are mapped back to the
//! squares and sub-squares they cover by [`index`].

pub mod error;
pub mod geometry;
pub mod gridref;
pub mod index;
pub mod location;
pub mod resolve;
pub mod squares;

pub use error::{GridError, Result};
pub use geometry::{Bounds, Point, do_overlap, overlaps};
pub use gridref::{GridRef, Quadrant, SubSquare};
pub use index::{SpatialIndex, SubSquareHits, get_sub_squares};
pub use location::{EastNorth, GeodeticTransform, LonLat, Location, LocationKind, Normalizer};
pub use resolve::{
    GridCell, Precision, QUADRANT_SIZE, SQUARE_SIZE, SUB_SQUARE_SIZE, grid_east_north, resolve,
};
