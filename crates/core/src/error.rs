//! Error types for grid reference parsing, resolution and normalization.

use thiserror::Error;

/// Error returned by an external geodetic transform.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Primary error type for grid reference operations.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("a valid grid ref must be 2, 4, or 6 chars in length: {0:?}")]
    InvalidLength(String),

    #[error("the first two characters of a grid ref cannot be numeric: {0:?}")]
    NonAlphaSquare(String),

    #[error("the third and fourth characters of a grid ref must be numeric: {0:?}")]
    NonNumericSubSquare(String),

    #[error("the fifth and sixth characters of a grid ref must be a valid quadrant: {0:?}")]
    InvalidQuadrant(String),

    #[error("unknown grid square: {0:?}")]
    UnknownSquare(String),

    #[error("geodetic transform failed: {0}")]
    ExternalTransform(#[source] TransformError),
}

impl GridError {
    /// Returns true for errors caused by malformed or unknown reference text.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, GridError::ExternalTransform(_))
    }
}

/// Convenience Result type alias for GridError.
pub type Result<T> = std::result::Result<T, GridError>;
