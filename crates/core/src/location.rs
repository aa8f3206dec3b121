//! Normalization of boundary locations to projected easting/northing.
//!
//! Locations arrive in one of three forms: ellipsoidal longitude/latitude,
//! projected easting/northing, or a grid reference. Ellipsoidal input is
//! handed to an externally supplied [`GeodeticTransform`]; this crate does no
//! datum or projection mathematics of its own.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result, TransformError};
use crate::resolve;

/// Longitude is X, latitude is Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// Projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EastNorth {
    pub east: f64,
    pub north: f64,
}

impl fmt::Display for EastNorth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.east, self.north)
    }
}

/// A location as received at the system boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Ellipsoidal(LonLat),
    Projected(EastNorth),
    /// Grid reference text, e.g. `SD` or `SD91SW`.
    GridRef(String),
}

impl Location {
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Ellipsoidal(_) => LocationKind::Wgs84,
            Location::Projected(_) => LocationKind::Osgb36,
            Location::GridRef(_) => LocationKind::NationalGrid,
        }
    }
}

/// Tag naming the representation of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Wgs84,
    Osgb36,
    NationalGrid,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Wgs84 => "WGS84",
            LocationKind::Osgb36 => "OSGB36",
            LocationKind::NationalGrid => "NATIONALGRID",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "WGS84" => Ok(LocationKind::Wgs84),
            "OSGB36" => Ok(LocationKind::Osgb36),
            "NATIONALGRID" => Ok(LocationKind::NationalGrid),
            other => Err(format!("unknown location type: {other}")),
        }
    }
}

/// Forward transform from ellipsoidal to projected coordinates.
///
/// Implemented for any `Fn(lon, lat, height) -> Result<(east, north), TransformError>`.
pub trait GeodeticTransform {
    fn forward(
        &self,
        lon: f64,
        lat: f64,
        height: f64,
    ) -> std::result::Result<(f64, f64), TransformError>;
}

impl<F> GeodeticTransform for F
where
    F: Fn(f64, f64, f64) -> std::result::Result<(f64, f64), TransformError>,
{
    fn forward(
        &self,
        lon: f64,
        lat: f64,
        height: f64,
    ) -> std::result::Result<(f64, f64), TransformError> {
        self(lon, lat, height)
    }
}

/// Placeholder transform that rejects every ellipsoidal location.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransform;

impl GeodeticTransform for NoTransform {
    fn forward(
        &self,
        _lon: f64,
        _lat: f64,
        _height: f64,
    ) -> std::result::Result<(f64, f64), TransformError> {
        Err("no geodetic transform configured".into())
    }
}

/// Converts [`Location`]s to projected coordinates.
#[derive(Debug, Clone)]
pub struct Normalizer<T> {
    transform: T,
    height: f64,
}

impl Default for Normalizer<NoTransform> {
    fn default() -> Self {
        Self::new(NoTransform)
    }
}

impl<T: GeodeticTransform> Normalizer<T> {
    /// Creates a normalizer; ellipsoidal heights default to 0.
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            height: 0.0,
        }
    }

    /// Sets the ellipsoidal height passed to the transform.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Normalizes a location to easting/northing.
    ///
    /// Grid references resolve to the centre of the cell they name.
    pub fn to_east_north(&self, location: &Location) -> Result<EastNorth> {
        match location {
            Location::Ellipsoidal(LonLat { lon, lat }) => {
                let (east, north) = self
                    .transform
                    .forward(*lon, *lat, self.height)
                    .map_err(GridError::ExternalTransform)?;
                Ok(EastNorth { east, north })
            }
            Location::Projected(en) => Ok(*en),
            Location::GridRef(text) => {
                let (east, north) = resolve::grid_east_north(text)?;
                Ok(EastNorth { east, north })
            }
        }
    }
}
