//! Coordinate expressions for placing elements.
//!
//! A [`Position`] is an opaque 3-D coordinate expression: either a literal
//! like `(-3,0,0)` or a reference to an anchor of a previously emitted
//! element like `(conv1-east)`. It is passed verbatim into the `shift` and
//! `at` fields of the emitted markup, so chaining elements is a matter of
//! pointing `to` at the previous element's anchor and giving an `offset`.
//!
//! ```
//! use strata_core::position::{Anchor, Position};
//!
//! let to = Position::anchor("conv1", Anchor::East);
//! assert_eq!(to.as_str(), "(conv1-east)");
//! assert_eq!(Position::at(1, 0, 0).as_str(), "(1,0,0)");
//! ```

use std::fmt;

use serde::Deserialize;

/// Named reference points on an emitted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    East,
    West,
    North,
    South,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Near,
    Far,
    Anchor,
}

impl Anchor {
    /// Returns the suffix appended to an element name to address this anchor.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::East => "east",
            Self::West => "west",
            Self::North => "north",
            Self::South => "south",
            Self::NorthEast => "northeast",
            Self::NorthWest => "northwest",
            Self::SouthEast => "southeast",
            Self::SouthWest => "southwest",
            Self::Near => "near",
            Self::Far => "far",
            Self::Anchor => "anchor",
        }
    }
}

/// A textual 3-D coordinate expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    /// Wrap an arbitrary expression without inspecting it.
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// Literal coordinate `(x,y,z)`.
    pub fn at(x: impl fmt::Display, y: impl fmt::Display, z: impl fmt::Display) -> Self {
        Self(format!("({x},{y},{z})"))
    }

    /// Anchor of a previously emitted element, `(name-suffix)`.
    pub fn anchor(name: &str, anchor: Anchor) -> Self {
        Self(format!("({name}-{})", anchor.suffix()))
    }

    /// The expression as it will be emitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new("(0,0,0)")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}

impl From<String> for Position {
    fn from(expr: String) -> Self {
        Self(expr)
    }
}
