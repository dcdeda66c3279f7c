//! Positions inside definition text, as pest reports them.

use std::fmt;

use pest::Position;
use pest::error::LineColLocation;

/// Where in the definition text a tokenizer gave up.
///
/// Values are kept exactly as pest hands them out: 1-based, with the column
/// counted in characters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl LineCol {
    /// A position from 1-based line and column numbers.
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl From<(usize, usize)> for LineCol {
    /// Accepts the tuple returned by [`Position::line_col`].
    fn from((line, col): (usize, usize)) -> Self {
        Self::new(line, col)
    }
}

impl From<Position<'_>> for LineCol {
    fn from(pos: Position<'_>) -> Self {
        pos.line_col().into()
    }
}

impl From<&LineColLocation> for LineCol {
    /// Spans collapse to where they start.
    fn from(location: &LineColLocation) -> Self {
        match *location {
            LineColLocation::Pos(pos) => pos.into(),
            LineColLocation::Span(start, _) => start.into(),
        }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol::new(1, 1).to_string(), "1:1");
        assert_eq!(LineCol::new(3, 15).to_string(), "3:15");
    }

    #[test]
    fn test_from_pest_position() {
        let text = "GEOGCS[\n  DATUM";
        let pos = Position::new(text, 11).unwrap();
        assert_eq!(LineCol::from(pos), LineCol::new(2, 4));
    }

    #[test]
    fn test_error_span_uses_start() {
        let location = LineColLocation::Span((2, 5), (4, 1));
        assert_eq!(LineCol::from(&location), LineCol::new(2, 5));
        assert_eq!(LineCol::from(&LineColLocation::Pos((1, 9))), LineCol::new(1, 9));
    }
}
