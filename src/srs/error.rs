//! Errors raised while building SRS records.

use crate::base::Srid;
use crate::wkt::WktError;

/// Stable diagnostic codes for SRS construction failures.
pub mod codes {
    /// The definition text is empty or was rejected by the tokenizer.
    pub const PARSE_ERROR: &str = "ER_SRS_PARSE_ERROR";
    /// A mandatory projection parameter could not be resolved.
    pub const PROJ_PARAMETER_MISSING: &str = "ER_SRS_PROJ_PARAMETER_MISSING";
}

/// The result returned by the SRS entry points.
pub type Result<T, E = SrsError> = std::result::Result<T, E>;

/// The definition could not be turned into a parse tree.
///
/// `source` is `None` when the text was empty and the tokenizer never ran.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("SRS {srid}: can't parse the spatial reference system definition")]
pub struct ParseError {
    pub srid: Srid,
    #[source]
    pub source: Option<WktError>,
}

/// A projection parameter the projection kind requires was not found by
/// EPSG code, name or alias.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("SRS {srid}: missing projection parameter '{name}' (EPSG:{epsg_code})")]
pub struct MissingParameterError {
    pub srid: Srid,
    pub name: &'static str,
    pub epsg_code: u32,
}

/// A deserialized projected SRS whose parameter map is not the one its
/// projection kind declares.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("projection parameters do not match the '{kind}' method")]
pub struct ParameterMismatchError {
    pub kind: super::ProjectionKind,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SrsError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    MissingParameter(#[from] MissingParameterError),
}

impl SrsError {
    /// The SRID of the definition that failed.
    pub fn srid(&self) -> Srid {
        match self {
            SrsError::Parse(e) => e.srid,
            SrsError::MissingParameter(e) => e.srid,
        }
    }

    /// The diagnostic code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            SrsError::Parse(_) => codes::PARSE_ERROR,
            SrsError::MissingParameter(_) => codes::PROJ_PARAMETER_MISSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_parameter_message() {
        let err = MissingParameterError {
            srid: Srid::new(2000000),
            name: "latitude_of_origin",
            epsg_code: 8801,
        };
        assert_eq!(
            err.to_string(),
            "SRS 2000000: missing projection parameter 'latitude_of_origin' (EPSG:8801)"
        );
    }

    #[test]
    fn test_parse_error_source() {
        let empty = ParseError {
            srid: Srid::new(1),
            source: None,
        };
        assert!(empty.source().is_none());

        let rejected = ParseError {
            srid: Srid::new(1),
            source: Some(WktError::new("expected UNIT")),
        };
        assert_eq!(rejected.source().map(|s| s.to_string()).as_deref(), Some("expected UNIT"));
    }

    #[test]
    fn test_srs_error_codes() {
        let parse: SrsError = ParseError {
            srid: Srid::new(7),
            source: None,
        }
        .into();
        assert_eq!(parse.code(), codes::PARSE_ERROR);
        assert_eq!(parse.srid(), Srid::new(7));

        let missing: SrsError = MissingParameterError {
            srid: Srid::new(8),
            name: "scale_factor",
            epsg_code: 8805,
        }
        .into();
        assert_eq!(missing.code(), codes::PROJ_PARAMETER_MISSING);
        assert_eq!(missing.srid(), Srid::new(8));
    }
}
