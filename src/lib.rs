//! # srs-base
//!
//! Spatial reference system construction from WKT definitions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! srs   → SRS records, projection table, parameter resolution, entry points
//!   ↓
//! wkt   → Parse tree + pest tokenizer
//!   ↓
//! base  → Primitives (Srid, AxisDirection, LineCol)
//! ```
//!
//! ## Usage
//!
//! ```
//! use srs::{Srid, parse_wkt};
//!
//! let wkt = r#"GEOGCS["WGS 84",DATUM["WGS 84",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.017453292519943278]]"#;
//! let srs = parse_wkt(Srid::new(4326), wkt).unwrap();
//! assert!(srs.is_geographic());
//! assert_eq!(srs.semi_major_axis(), 6378137.0);
//! ```

/// Foundation types: Srid, AxisDirection, LineCol
pub mod base;

/// SRS records and their construction
pub mod srs;

/// Tokenizer boundary and WKT parse tree
pub mod wkt;

// Re-export the common entry points
pub use base::{AxisDirection, LineCol, Srid};
pub use srs::{
    GeographicSrs, MissingParameterError, ParseError, ProjectedSrs, ProjectionKind,
    SpatialReferenceSystem, SrsError, SrsType, parse_wkt, parse_wkt_with,
};
