//! Error type shared by the matrix, vector and solver modules.

use std::fmt;

use thiserror::Error;

/// Which dimension an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A column index (`x`).
    Column,
    /// A row index (`y`).
    Row,
    /// A vector component index.
    Component,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
            Axis::Component => f.write_str("component"),
        }
    }
}

/// Errors raised by linear algebra operations.
///
/// None of these are recovered from inside the crate; every fallible
/// operation hands them straight back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A runtime index was outside the compile-time bounds.
    #[error("{axis} index {index} out of range (length {len})")]
    Index {
        /// The indexed dimension.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// The length of the dimension.
        len: usize,
    },

    /// The determinant is within epsilon of zero.
    #[error("matrix is singular")]
    SingularMatrix,

    /// A zero coefficient row survived row-echelon reduction.
    #[error("linear system is singular")]
    SingularSystem,

    /// A runtime-sized input did not match the static dimensions.
    #[error("dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch {
        /// The number of values the type requires.
        expected: usize,
        /// The number of values supplied.
        found: usize,
    },

    /// No donor row can clear the entry at `(x, y)`.
    #[error("no row can eliminate entry ({x}, {y})")]
    NoEliminableRow {
        /// Column of the entry.
        x: usize,
        /// Row of the entry.
        y: usize,
    },

    /// A row was scaled by a value within epsilon of zero.
    #[error("cannot scale row {row} by zero")]
    DegenerateScale {
        /// The row that would have been annihilated.
        row: usize,
    },

    /// A rotation axis of zero length.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// A row was asked to absorb a multiple of itself.
    #[error("cannot add row {row} to itself")]
    SelfAddition {
        /// The row used as both source and target.
        row: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;

pub(crate) fn check_index(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::Index { axis, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(Axis::Row, 2, 3).is_ok());
        assert_eq!(
            check_index(Axis::Column, 3, 3),
            Err(LinalgError::Index {
                axis: Axis::Column,
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_messages() {
        let err = LinalgError::Index {
            axis: Axis::Row,
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "row index 4 out of range (length 2)");
        assert_eq!(
            LinalgError::DimensionMismatch {
                expected: 4,
                found: 3
            }
            .to_string(),
            "dimension mismatch: expected 4 values, found 3"
        );
    }
}
