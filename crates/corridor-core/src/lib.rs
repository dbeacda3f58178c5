//! **corridor-core**: the grid model for corridor.
//!
//! This crate provides the foundational types shared by the corridor
//! crates: `(row, col)` coordinates, rectangle dimensions with row-major
//! indexing, the two cell states, and the immutable [`Grid`] whose
//! entrance is the top-left cell and whose exit is the bottom-right one.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use error::GridError;
pub use geom::{Coord, CoordIter, Dims};
pub use grid::Grid;
