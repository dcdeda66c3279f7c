//! Foundation types for SRS construction.
//!
//! This module provides the primitives shared by the parse tree and the
//! finished records:
//! - [`Srid`] - Catalog identifier carried for diagnostics
//! - [`AxisDirection`] - Axis orientation keywords
//! - [`LineCol`] - Positions inside definition text
//!
//! This module has NO dependencies on other srs modules.

mod axis;
mod span;
mod srid;

pub use axis::AxisDirection;
pub use span::LineCol;
pub use srid::Srid;
