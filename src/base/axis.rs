//! Axis directions shared by parse trees and SRS records.

use std::fmt;

/// Direction of a coordinate system axis.
///
/// `Unspecified` never appears inside a finished record; it is what
/// accessors report for an axis the definition did not declare.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDirection {
    #[default]
    Unspecified,
    North,
    South,
    East,
    West,
    Other,
}

impl AxisDirection {
    /// Parse a WKT axis direction keyword, ignoring case.
    ///
    /// Returns `None` for anything that is not one of the five directions
    /// allowed in an `AXIS` clause.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        const KEYWORDS: [(&str, AxisDirection); 5] = [
            ("NORTH", AxisDirection::North),
            ("SOUTH", AxisDirection::South),
            ("EAST", AxisDirection::East),
            ("WEST", AxisDirection::West),
            ("OTHER", AxisDirection::Other),
        ];
        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(keyword))
            .map(|&(_, dir)| dir)
    }

    /// The WKT keyword for this direction.
    pub fn keyword(&self) -> &'static str {
        match self {
            AxisDirection::Unspecified => "UNSPECIFIED",
            AxisDirection::North => "NORTH",
            AxisDirection::South => "SOUTH",
            AxisDirection::East => "EAST",
            AxisDirection::West => "WEST",
            AxisDirection::Other => "OTHER",
        }
    }

    /// False only for the placeholder used when a definition has no `AXIS`.
    #[inline]
    pub fn is_specified(&self) -> bool {
        *self != AxisDirection::Unspecified
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
