//! Error types for the engine.
//!
//! Illegal moves are not errors: games report them as `false`. The variants
//! here cover construction, raw board access and text parsing.

use std::fmt;

use thiserror::Error;

/// Which coordinate of a point failed a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("{axis} coordinate out of range: {index} (limit {limit})")]
    OutOfBounds {
        axis: Axis,
        index: usize,
        limit: usize,
    },

    #[error("{name} must be greater than 0 (got {value})")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("token '{token}' is used for more than one cell kind")]
    DuplicateToken { token: char },

    #[error("malformed coordinate '{input}' (expected 'x,y')")]
    MalformedCoordinate { input: String },

    #[error("invalid board layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("unknown token '{token}' at row {row}, column {column}")]
    UnknownToken {
        token: String,
        row: usize,
        column: usize,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_names_axis() {
        let err = Error::OutOfBounds {
            axis: Axis::Y,
            index: 7,
            limit: 3,
        };
        assert_eq!(err.to_string(), "Y coordinate out of range: 7 (limit 3)");
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = Error::InvalidDimension {
            name: "rows",
            value: 0,
        };
        assert_eq!(err.to_string(), "rows must be greater than 0 (got 0)");
    }
}
