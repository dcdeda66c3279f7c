//! Parse tree produced by a [`Tokenizer`](super::Tokenizer).
//!
//! These nodes mirror the clauses of a WKT definition one to one. They are
//! read-only input to the SRS builders; every numeric field the grammar
//! requires is guaranteed to be present by the tokenizer.

use smol_str::SmolStr;

use crate::base::AxisDirection;

/// An `AUTHORITY["name", "code"]` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authority {
    pub name: SmolStr,
    pub code: SmolStr,
}

impl Authority {
    pub fn new(name: impl Into<SmolStr>, code: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Shorthand for an EPSG authority with a numeric code.
    pub fn epsg(code: u32) -> Self {
        Self::new("EPSG", code.to_string())
    }

    /// Whether the authority name is EPSG, ignoring case.
    pub fn is_epsg(&self) -> bool {
        self.name.eq_ignore_ascii_case("EPSG")
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spheroid {
    pub name: SmolStr,
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub authority: Option<Authority>,
}

/// A `TOWGS84` clause. Values not written in the text are zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowGs84 {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ex: f64,
    pub ey: f64,
    pub ez: f64,
    pub ppm: f64,
}

impl TowGs84 {
    /// Build from up to seven values, padding the rest with zero.
    pub fn from_values(values: &[f64]) -> Self {
        let mut v = [0.0; 7];
        for (slot, value) in v.iter_mut().zip(values) {
            *slot = *value;
        }
        let [dx, dy, dz, ex, ey, ez, ppm] = v;
        Self { dx, dy, dz, ex, ey, ez, ppm }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Datum {
    pub name: SmolStr,
    pub spheroid: Spheroid,
    pub towgs84: Option<TowGs84>,
    pub authority: Option<Authority>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeMeridian {
    pub name: SmolStr,
    pub longitude: f64,
    pub authority: Option<Authority>,
}

/// A `UNIT` clause, angular or linear depending on where it appears.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub name: SmolStr,
    pub conversion_factor: f64,
    pub authority: Option<Authority>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub name: SmolStr,
    pub direction: AxisDirection,
}

/// A pair of `AXIS` clauses. The grammar never yields just one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCs {
    pub name: SmolStr,
    pub datum: Datum,
    pub prime_meridian: PrimeMeridian,
    pub angular_unit: Unit,
    pub axes: Option<Axes>,
    pub authority: Option<Authority>,
}

/// The `PROJECTION` clause naming the coordinate operation method.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub name: SmolStr,
    pub authority: Option<Authority>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: SmolStr,
    pub value: f64,
    pub authority: Option<Authority>,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            authority: None,
        }
    }

    pub fn with_authority(mut self, authority: Authority) -> Self {
        self.authority = Some(authority);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCs {
    pub name: SmolStr,
    pub geographic_cs: GeographicCs,
    pub projection: Projection,
    pub parameters: Vec<Parameter>,
    pub linear_unit: Unit,
    pub axes: Option<Axes>,
    pub authority: Option<Authority>,
}

/// The root of a parse tree: exactly one of the two shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateSystem {
    Geographic(GeographicCs),
    Projected(ProjectedCs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_towgs84_pads_with_zero() {
        let shift = TowGs84::from_values(&[1.0, 2.0, 3.0]);
        assert_eq!(shift.dx, 1.0);
        assert_eq!(shift.dz, 3.0);
        assert_eq!(shift.ex, 0.0);
        assert_eq!(shift.ppm, 0.0);
    }

    #[test]
    fn test_authority_is_epsg_ignores_case() {
        assert!(Authority::new("epsg", "8801").is_epsg());
        assert!(Authority::epsg(9807).is_epsg());
        assert!(!Authority::new("ESRI", "8801").is_epsg());
    }
}
