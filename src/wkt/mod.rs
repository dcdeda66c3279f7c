//! WKT tokenizer boundary.
//!
//! The SRS builders consume a [`CoordinateSystem`] parse tree and never look
//! at raw text. Anything that can produce such a tree implements
//! [`Tokenizer`]; [`WktTokenizer`] is the pest-based default used by
//! [`crate::srs::parse_wkt`].

mod parser;
pub mod tree;

use crate::base::LineCol;

pub use parser::parse_coordinate_system;
pub use tree::{
    Authority, Axes, Axis, CoordinateSystem, Datum, GeographicCs, Parameter, PrimeMeridian,
    Projection, ProjectedCs, Spheroid, TowGs84, Unit,
};

/// Turns definition text into a parse tree.
///
/// Implementations must uphold the shape guarantees the builders rely on:
/// mandatory numbers are present, `TOWGS84` is either absent or fully
/// populated, and axes come in specified pairs.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<CoordinateSystem, WktError>;
}

/// The default WKT 1 tokenizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct WktTokenizer;

impl Tokenizer for WktTokenizer {
    fn tokenize(&self, text: &str) -> Result<CoordinateSystem, WktError> {
        parse_coordinate_system(text)
    }
}

/// A rejected definition, with the position pest reported when available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", at_position(.position))]
pub struct WktError {
    pub message: String,
    pub position: Option<LineCol>,
}

impl WktError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
        }
    }

    /// Attach the position the tokenizer stopped at.
    pub fn at(mut self, position: LineCol) -> Self {
        self.position = Some(position);
        self
    }
}

fn at_position(position: &Option<LineCol>) -> String {
    position.map(|p| format!(" at {}", p)).unwrap_or_default()
}
