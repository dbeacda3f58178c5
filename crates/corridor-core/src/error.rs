//! Error types for grid construction.

use std::fmt;

/// Errors arising from building a [`Grid`](crate::Grid) with an invalid shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its first row has no cells.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The cell count does not fit under the distance sentinel.
    TooLarge {
        cells: usize,
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { cells, max } => {
                write!(f, "grid has {cells} cells, at most {max} are supported")
            }
        }
    }
}

impl std::error::Error for GridError {}
