//! Spatial reference system records and their construction.
//!
//! ## Flow
//!
//! ```text
//! text ─▶ Tokenizer ─▶ CoordinateSystem
//!                         ├─ Geographic ─▶ GeographicSrs
//!                         └─ Projected  ─▶ ProjectionKind (EPSG method code)
//!                                          ─▶ resolve(parameters, table)
//!                                          ─▶ ProjectedSrs
//! ```
//!
//! Every record is built in one step and is either complete or not returned
//! at all.

mod error;
mod geographic;
mod params;
mod projected;
mod projection;
mod resolve;

pub use error::{MissingParameterError, ParseError, Result, SrsError, codes};
#[cfg(feature = "serde")]
pub use error::ParameterMismatchError;
pub use geographic::{DatumShift, GeographicSrs};
pub use params::ParameterSpec;
pub use projected::ProjectedSrs;
pub use projection::{ProjectionKind, select_kind};
pub use resolve::{ProjectionParameters, ResolvedParameter, resolve};

use crate::base::{AxisDirection, Srid};
use crate::wkt::{CoordinateSystem, Tokenizer, WktTokenizer};

// ============================================================================
// SPATIAL REFERENCE SYSTEM
// ============================================================================

/// Whether a system is geographic or projected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SrsType {
    Geographic,
    Projected,
}

/// A finished spatial reference system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpatialReferenceSystem {
    Geographic(GeographicSrs),
    Projected(ProjectedSrs),
}

impl SpatialReferenceSystem {
    /// Geographic or projected.
    pub fn srs_type(&self) -> SrsType {
        match self {
            SpatialReferenceSystem::Geographic(_) => SrsType::Geographic,
            SpatialReferenceSystem::Projected(_) => SrsType::Projected,
        }
    }

    /// True for a geographic system.
    pub fn is_geographic(&self) -> bool {
        self.srs_type() == SrsType::Geographic
    }

    /// True for a projected system.
    pub fn is_projected(&self) -> bool {
        self.srs_type() == SrsType::Projected
    }

    /// The geographic record, if this is one.
    pub fn as_geographic(&self) -> Option<&GeographicSrs> {
        match self {
            SpatialReferenceSystem::Geographic(g) => Some(g),
            SpatialReferenceSystem::Projected(_) => None,
        }
    }

    /// The projected record, if this is one.
    pub fn as_projected(&self) -> Option<&ProjectedSrs> {
        match self {
            SpatialReferenceSystem::Projected(p) => Some(p),
            SpatialReferenceSystem::Geographic(_) => None,
        }
    }

    /// The geographic data, embedded or not.
    pub fn geographic(&self) -> &GeographicSrs {
        match self {
            SpatialReferenceSystem::Geographic(g) => g,
            SpatialReferenceSystem::Projected(p) => p.geographic(),
        }
    }

    /// Semi-major axis of the ellipsoid, in metres.
    pub fn semi_major_axis(&self) -> f64 {
        self.geographic().semi_major_axis()
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inverse_flattening(&self) -> f64 {
        self.geographic().inverse_flattening()
    }

    /// Prime meridian longitude, in the angular unit.
    pub fn prime_meridian(&self) -> f64 {
        self.geographic().prime_meridian()
    }

    /// Conversion factor from the angular unit to radians.
    pub fn angular_unit(&self) -> f64 {
        self.geographic().angular_unit()
    }

    /// The linear unit of a projected system.
    pub fn linear_unit(&self) -> Option<f64> {
        self.as_projected().map(ProjectedSrs::linear_unit)
    }

    /// Direction of the system's own axis 0 or 1.
    ///
    /// For projected systems these are the projected axes, not the axes of
    /// the embedded geographic system.
    pub fn axis_direction(&self, axis: usize) -> AxisDirection {
        match self {
            SpatialReferenceSystem::Geographic(g) => g.axis_direction(axis),
            SpatialReferenceSystem::Projected(p) => p.axis_direction(axis),
        }
    }
}

impl From<GeographicSrs> for SpatialReferenceSystem {
    fn from(srs: GeographicSrs) -> Self {
        SpatialReferenceSystem::Geographic(srs)
    }
}

impl From<ProjectedSrs> for SpatialReferenceSystem {
    fn from(srs: ProjectedSrs) -> Self {
        SpatialReferenceSystem::Projected(srs)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Parse a WKT definition with the default tokenizer.
pub fn parse_wkt(srid: Srid, text: &str) -> Result<SpatialReferenceSystem> {
    parse_wkt_with(&WktTokenizer, srid, text)
}

/// Parse a definition with a caller-supplied tokenizer.
///
/// Empty text fails with [`ParseError`] before the tokenizer runs.
#[tracing::instrument(level = "debug", skip(tokenizer, text))]
pub fn parse_wkt_with<T>(tokenizer: &T, srid: Srid, text: &str) -> Result<SpatialReferenceSystem>
where
    T: Tokenizer + ?Sized,
{
    if text.is_empty() {
        tracing::debug!("empty SRS definition");
        return Err(ParseError { srid, source: None }.into());
    }

    let tree = tokenizer.tokenize(text).map_err(|e| {
        tracing::debug!(error = %e, "SRS definition rejected by tokenizer");
        ParseError {
            srid,
            source: Some(e),
        }
    })?;

    build(srid, &tree)
}

/// Build a record from an already tokenized definition.
pub fn build(srid: Srid, tree: &CoordinateSystem) -> Result<SpatialReferenceSystem> {
    match tree {
        CoordinateSystem::Geographic(g) => Ok(GeographicSrs::from_parse_tree(srid, g).into()),
        CoordinateSystem::Projected(p) => Ok(ProjectedSrs::from_parse_tree(srid, p)?.into()),
    }
}
