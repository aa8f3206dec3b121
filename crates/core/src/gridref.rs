//! Grid reference grammar: parsing, validation and formatting.
//!
//! A reference is a two-letter square code, optionally followed by a
//! two-digit sub-square (east digit, then north digit) and, only when the
//! sub-square is present, a compass quadrant:
//!
//! ```text
//! SD        square        100 km
//! SD91      sub-square     10 km
//! SD91NW    quadrant        5 km
//! ```
//!
//! Parsing is purely positional and does not consult the square table;
//! unknown squares are rejected by [`crate::resolve`].

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use tracing::debug;

use crate::error::{GridError, Result};
use crate::resolve::Precision;

/// One of the four 5 km quarters of a sub-square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    NE,
    NW,
    SE,
    SW,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NE, Quadrant::NW, Quadrant::SE, Quadrant::SW];

    /// The two-letter code used in reference text.
    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::NE => "NE",
            Quadrant::NW => "NW",
            Quadrant::SE => "SE",
            Quadrant::SW => "SW",
        }
    }

    /// Matches a quadrant code exactly. Lowercase codes are not accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NE" => Some(Quadrant::NE),
            "NW" => Some(Quadrant::NW),
            "SE" => Some(Quadrant::SE),
            "SW" => Some(Quadrant::SW),
            _ => None,
        }
    }

    /// Offset of the quadrant's south-west corner in quadrant steps (east, north).
    pub fn steps(self) -> (u8, u8) {
        match self {
            Quadrant::SW => (0, 0),
            Quadrant::NW => (0, 1),
            Quadrant::SE => (1, 0),
            Quadrant::NE => (1, 1),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Quadrant::from_code(s).ok_or_else(|| GridError::InvalidQuadrant(s.to_string()))
    }
}

/// A 10 km sub-square within a square, addressed by one digit per axis.
///
/// The sub-square number `0..=99` has the east digit in the tens place and
/// the north digit in the units place, so `SD91` is number 91.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubSquare {
    east: u8,
    north: u8,
}

impl SubSquare {
    /// Creates a sub-square from its digits. Returns `None` if either exceeds 9.
    pub fn new(east: u8, north: u8) -> Option<Self> {
        (east <= 9 && north <= 9).then_some(Self { east, north })
    }

    /// Creates a sub-square from its number `0..=99`.
    pub fn from_number(number: u8) -> Option<Self> {
        (number < 100).then_some(Self {
            east: number / 10,
            north: number % 10,
        })
    }

    pub fn east(&self) -> u8 {
        self.east
    }

    pub fn north(&self) -> u8 {
        self.north
    }

    pub fn number(&self) -> u8 {
        self.east * 10 + self.north
    }

    fn from_digits(text: &str) -> Option<Self> {
        match text.as_bytes() {
            [e, n] if e.is_ascii_digit() && n.is_ascii_digit() => Some(Self {
                east: e - b'0',
                north: n - b'0',
            }),
            _ => None,
        }
    }
}

impl fmt::Display for SubSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.east, self.north)
    }
}

/// A structured grid reference.
///
/// A quadrant can only be set together with a sub-square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridRef {
    square: SmolStr,
    sub_square: Option<SubSquare>,
    quadrant: Option<Quadrant>,
}

impl GridRef {
    /// A square-level reference. The code is not checked against the table.
    pub fn new(square: &str) -> Self {
        Self {
            square: SmolStr::new(square),
            sub_square: None,
            quadrant: None,
        }
    }

    /// Refines the reference to a sub-square, clearing any quadrant.
    pub fn with_sub_square(mut self, sub_square: SubSquare) -> Self {
        self.sub_square = Some(sub_square);
        self.quadrant = None;
        self
    }

    /// Refines the reference to a quadrant of the given sub-square.
    pub fn with_quadrant(mut self, sub_square: SubSquare, quadrant: Quadrant) -> Self {
        self.sub_square = Some(sub_square);
        self.quadrant = Some(quadrant);
        self
    }

    pub fn square(&self) -> &str {
        &self.square
    }

    pub fn sub_square(&self) -> Option<SubSquare> {
        self.sub_square
    }

    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// The most specific level this reference names.
    pub fn precision(&self) -> Precision {
        match (self.sub_square, self.quadrant) {
            (Some(_), Some(_)) => Precision::Quadrant,
            (Some(_), None) => Precision::SubSquare,
            _ => Precision::Square,
        }
    }
}

impl fmt::Display for GridRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.square)?;
        if let Some(sub) = self.sub_square {
            write!(f, "{sub}")?;
            if let Some(quadrant) = self.quadrant {
                f.write_str(quadrant.as_str())?;
            }
        }
        Ok(())
    }
}

impl FromStr for GridRef {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Positional split shared by [`validate`] and [`parse`].
fn scan(text: &str) -> Result<GridRef> {
    let len = text.len();
    if !matches!(len, 2 | 4 | 6) {
        return Err(GridError::InvalidLength(text.to_string()));
    }

    // A square that reads as an integer ("00", "+1", "-5") is rejected.
    let square = match text.get(0..2) {
        Some(sq) if sq.parse::<i64>().is_err() => sq,
        _ => return Err(GridError::NonAlphaSquare(text.to_string())),
    };
    let gridref = GridRef::new(square);
    if len == 2 {
        return Ok(gridref);
    }

    let sub_square = text
        .get(2..4)
        .and_then(SubSquare::from_digits)
        .ok_or_else(|| GridError::NonNumericSubSquare(text.to_string()))?;
    if len == 4 {
        return Ok(gridref.with_sub_square(sub_square));
    }

    let quadrant = text
        .get(4..6)
        .and_then(Quadrant::from_code)
        .ok_or_else(|| GridError::InvalidQuadrant(text.to_string()))?;
    Ok(gridref.with_quadrant(sub_square, quadrant))
}

/// Checks the grammar of a reference without building it.
pub fn validate(text: &str) -> Result<()> {
    parse(text).map(|_| ())
}

/// Parses reference text into a [`GridRef`].
pub fn parse(text: &str) -> Result<GridRef> {
    scan(text).inspect_err(|e| debug!(reference = text, error = %e, "rejected grid reference"))
}

/// Formats a reference back to text; the inverse of [`parse`].
pub fn format(gridref: &GridRef) -> String {
    gridref.to_string()
}
