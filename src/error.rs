//! Error type for color code parsing.
//!
//! This module provides [`ParseError`], the only error type the crate
//! surfaces. Formatting has no error path: a structurally valid
//! [`ColorComponents`](crate::ColorComponents) always formats, and the one
//! absence case (no keyword for a value) is reported as `None`, not an error.

use std::fmt;

/// Error type for [`parse`](crate::parse) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input matched none of the seven recognized code shapes, or a
    /// numeric field violated its declared range or type. Carries the
    /// trimmed input that was rejected.
    InvalidFormat(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat(input) => {
                write!(f, "invalid color code: {:?}", input)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input() {
        let err = ParseError::InvalidFormat("notacolor".to_string());
        assert_eq!(err.to_string(), "invalid color code: \"notacolor\"");
    }
}
