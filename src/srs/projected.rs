//! Projected SRS records.

use super::error::MissingParameterError;
#[cfg(feature = "serde")]
use super::error::ParameterMismatchError;
use super::geographic::{GeographicSrs, axis_at, axis_pair};
use super::projection::ProjectionKind;
use super::resolve::{self, ProjectionParameters};
use crate::base::{AxisDirection, Srid};
use crate::wkt::ProjectedCs;

/// A projected spatial reference system: a geographic SRS plus a projection.
///
/// Deserialized records are checked against the parameter table of their
/// projection kind, and rejected if the map holds anything else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ProjectedSrsRepr"))]
pub struct ProjectedSrs {
    geographic: GeographicSrs,
    linear_unit: f64,
    axes: Option<[AxisDirection; 2]>,
    kind: ProjectionKind,
    parameters: ProjectionParameters,
}

impl ProjectedSrs {
    /// Build a projected SRS from its parse tree.
    ///
    /// The projection kind is chosen from the `PROJECTION` authority and its
    /// mandatory parameters are resolved from the `PARAMETER` clauses. If any
    /// of them is missing, no record is produced.
    pub fn from_parse_tree(srid: Srid, cs: &ProjectedCs) -> Result<Self, MissingParameterError> {
        let geographic = GeographicSrs::from_parse_tree(srid, &cs.geographic_cs);

        debug_assert!(!cs.linear_unit.conversion_factor.is_nan());
        let linear_unit = cs.linear_unit.conversion_factor;
        let axes = axis_pair(cs.axes.as_ref());

        let kind = ProjectionKind::from_authority(cs.projection.authority.as_ref());
        let parameters = resolve::resolve(srid, &cs.parameters, kind.parameter_specs())?;

        tracing::debug!(
            %srid,
            projection = kind.name(),
            parameters = parameters.len(),
            "built projected SRS"
        );

        Ok(Self {
            geographic,
            linear_unit,
            axes,
            kind,
            parameters,
        })
    }

    /// The embedded geographic SRS.
    pub fn geographic(&self) -> &GeographicSrs {
        &self.geographic
    }

    /// Conversion factor from the linear unit to metres.
    pub fn linear_unit(&self) -> f64 {
        self.linear_unit
    }

    /// Direction of projected axis 0 or 1, `Unspecified` if not declared.
    pub fn axis_direction(&self, axis: usize) -> AxisDirection {
        axis_at(self.axes, axis)
    }

    /// The projection method, `Unknown` if it was not recognized.
    pub fn projection_kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Every parameter the projection kind requires, in table order.
    pub fn parameters(&self) -> &ProjectionParameters {
        &self.parameters
    }

    /// A resolved projection parameter by semantic name.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name)
    }

    /// Semi-major axis of the embedded geographic SRS.
    pub fn semi_major_axis(&self) -> f64 {
        self.geographic.semi_major_axis()
    }

    /// Inverse flattening of the embedded geographic SRS.
    pub fn inverse_flattening(&self) -> f64 {
        self.geographic.inverse_flattening()
    }

    /// Prime meridian of the embedded geographic SRS.
    pub fn prime_meridian(&self) -> f64 {
        self.geographic.prime_meridian()
    }

    /// Angular unit of the embedded geographic SRS.
    pub fn angular_unit(&self) -> f64 {
        self.geographic.angular_unit()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ProjectedSrsRepr {
    geographic: GeographicSrs,
    linear_unit: f64,
    axes: Option<[AxisDirection; 2]>,
    kind: ProjectionKind,
    parameters: ProjectionParameters,
}

#[cfg(feature = "serde")]
impl TryFrom<ProjectedSrsRepr> for ProjectedSrs {
    type Error = ParameterMismatchError;

    fn try_from(repr: ProjectedSrsRepr) -> Result<Self, Self::Error> {
        let parameters = repr
            .parameters
            .conform_to(repr.kind.parameter_specs())
            .ok_or(ParameterMismatchError { kind: repr.kind })?;
        Ok(Self {
            geographic: repr.geographic,
            linear_unit: repr.linear_unit,
            axes: repr.axes,
            kind: repr.kind,
            parameters,
        })
    }
}
