//! Spatial reference system identifiers.

use std::fmt;

/// The catalog identifier of a spatial reference system.
///
/// `Srid` is carried through construction purely so that failures can name
/// the definition they came from. It never influences whether a definition
/// is valid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Srid(pub u32);

impl Srid {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The number as stored in the catalog.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Srid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<Srid> for u32 {
    fn from(srid: Srid) -> Self {
        srid.0
    }
}
