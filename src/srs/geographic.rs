//! Geographic SRS records.

use crate::base::{AxisDirection, Srid};
use crate::wkt::{Axes, GeographicCs, TowGs84};

/// Seven-parameter datum shift towards WGS 84.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatumShift {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ex: f64,
    pub ey: f64,
    pub ez: f64,
    pub ppm: f64,
}

impl DatumShift {
    /// The parameters in `TOWGS84` order.
    pub fn to_array(&self) -> [f64; 7] {
        [self.dx, self.dy, self.dz, self.ex, self.ey, self.ez, self.ppm]
    }
}

impl From<&TowGs84> for DatumShift {
    fn from(t: &TowGs84) -> Self {
        Self {
            dx: t.dx,
            dy: t.dy,
            dz: t.dz,
            ex: t.ex,
            ey: t.ey,
            ez: t.ez,
            ppm: t.ppm,
        }
    }
}

/// A geographic (longitude/latitude) spatial reference system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicSrs {
    semi_major_axis: f64,
    inverse_flattening: f64,
    prime_meridian: f64,
    angular_unit: f64,
    datum_shift: Option<DatumShift>,
    axes: Option<[AxisDirection; 2]>,
}

impl GeographicSrs {
    /// Build a geographic SRS from its parse tree.
    ///
    /// The tokenizer guarantees every mandatory value is present, so this
    /// cannot fail. Those guarantees are asserted in debug builds.
    pub fn from_parse_tree(srid: Srid, cs: &GeographicCs) -> Self {
        let spheroid = &cs.datum.spheroid;
        debug_assert!(!spheroid.semi_major_axis.is_nan());
        debug_assert!(!spheroid.inverse_flattening.is_nan());
        debug_assert!(!cs.prime_meridian.longitude.is_nan());
        debug_assert!(!cs.angular_unit.conversion_factor.is_nan());

        let datum_shift = cs.datum.towgs84.as_ref().map(DatumShift::from);
        debug_assert!(datum_shift.is_none_or(|s| s.to_array().iter().all(|v| !v.is_nan())));

        tracing::trace!(%srid, name = %cs.name, "built geographic SRS");

        Self {
            semi_major_axis: spheroid.semi_major_axis,
            inverse_flattening: spheroid.inverse_flattening,
            prime_meridian: cs.prime_meridian.longitude,
            angular_unit: cs.angular_unit.conversion_factor,
            datum_shift,
            axes: axis_pair(cs.axes.as_ref()),
        }
    }

    /// Semi-major axis of the ellipsoid, in metres.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// Prime meridian longitude, in the angular unit.
    pub fn prime_meridian(&self) -> f64 {
        self.prime_meridian
    }

    /// Conversion factor from the angular unit to radians.
    pub fn angular_unit(&self) -> f64 {
        self.angular_unit
    }

    /// The `TOWGS84` parameters, if the datum declared any.
    pub fn datum_shift(&self) -> Option<&DatumShift> {
        self.datum_shift.as_ref()
    }

    /// True when the datum carries a `TOWGS84` clause.
    pub fn has_towgs84(&self) -> bool {
        self.datum_shift.is_some()
    }

    /// Direction of axis 0 or 1, `Unspecified` if the definition has none.
    pub fn axis_direction(&self, axis: usize) -> AxisDirection {
        axis_at(self.axes, axis)
    }
}

/// Copy an `AXIS` pair out of the parse tree.
pub(super) fn axis_pair(axes: Option<&Axes>) -> Option<[AxisDirection; 2]> {
    axes.map(|a| {
        debug_assert!(a.x.direction.is_specified());
        debug_assert!(a.y.direction.is_specified());
        [a.x.direction, a.y.direction]
    })
}

pub(super) fn axis_at(axes: Option<[AxisDirection; 2]>, axis: usize) -> AxisDirection {
    axes.and_then(|pair| pair.get(axis).copied())
        .unwrap_or(AxisDirection::Unspecified)
}
