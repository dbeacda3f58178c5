//! The [`Grid`] type: an immutable rectangle of [`CellState`]s.
//!
//! Cells are stored row-major in one flat buffer so that lookups are a
//! single multiply-add. The entrance is always the top-left cell and the
//! exit the bottom-right one; for a single-cell grid they coincide.

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::{Coord, Dims};

/// An immutable rectangular grid of passable and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<CellState>>", into = "Vec<Vec<CellState>>")
)]
pub struct Grid {
    cells: Vec<CellState>,
    dims: Dims,
}

impl Grid {
    /// Largest supported cell count. Path lengths never exceed the cell
    /// count, so sums of two distances stay well inside `u32`.
    pub const MAX_CELLS: usize = (u32::MAX / 4) as usize;

    /// Build a grid from rows of cell states.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let dims = Self::check_dims(height, width)?;
        let mut cells = Vec::with_capacity(dims.len());
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self { cells, dims })
    }

    /// Build a `height × width` grid, asking `f` for the state of each cell.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(Coord) -> CellState,
    ) -> Result<Self, GridError> {
        let dims = Self::check_dims(height, width)?;
        let cells = dims.iter().map(&mut f).collect();
        Ok(Self { cells, dims })
    }

    /// A `height × width` grid with every cell passable.
    pub fn open(height: usize, width: usize) -> Result<Self, GridError> {
        Self::from_fn(height, width, |_| CellState::Passable)
    }

    fn check_dims(height: usize, width: usize) -> Result<Dims, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        match height.checked_mul(width) {
            Some(cells) if cells <= Self::MAX_CELLS => Ok(Dims::new(height, width)),
            cells => Err(GridError::TooLarge {
                cells: cells.unwrap_or(usize::MAX),
                max: Self::MAX_CELLS,
            }),
        }
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Total number of cells. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, since construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// The entrance, `(0, 0)`.
    #[inline]
    pub fn entrance(&self) -> Coord {
        Coord::ORIGIN
    }

    /// The exit, `(H-1, W-1)`.
    #[inline]
    pub fn exit(&self) -> Coord {
        self.dims.last()
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.dims.index(c)
    }

    /// Coordinate of the flat index `idx`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        self.dims.coord(idx)
    }

    /// State of the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether the cell at `c` is blocked. Out-of-bounds cells are not.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_blocked)
    }

    /// Row-major iterator over `(Coord, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Iterator over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.dims.width)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }
}

impl TryFrom<Vec<Vec<CellState>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<CellState>> {
    fn from(g: Grid) -> Self {
        g.rows().map(<[CellState]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState::{Blocked as X, Passable as O};

    #[test]
    fn from_rows_and_at() {
        let g = Grid::from_rows(vec![vec![O, O, X], vec![X, O, O]]).unwrap();
        assert_eq!(g.dims(), Dims::new(2, 3));
        assert_eq!(g.len(), 6);
        assert_eq!(g.at(Coord::new(0, 2)), Some(X));
        assert_eq!(g.at(Coord::new(1, 1)), Some(O));
        assert_eq!(g.at(Coord::new(2, 0)), None);
        assert!(g.is_blocked(Coord::new(1, 0)));
        assert!(!g.is_blocked(Coord::new(9, 9)));
        assert_eq!(g.blocked_count(), 2);
    }

    #[test]
    fn endpoints() {
        let g = Grid::open(4, 7).unwrap();
        assert_eq!(g.entrance(), Coord::new(0, 0));
        assert_eq!(g.exit(), Coord::new(3, 6));
    }

    #[test]
    fn single_cell_endpoints_coincide() {
        let g = Grid::from_rows(vec![vec![X]]).unwrap();
        assert_eq!(g.entrance(), g.exit());
    }

    #[test]
    fn single_row_and_column() {
        let row = Grid::open(1, 5).unwrap();
        assert_eq!(row.exit(), Coord::new(0, 4));
        let col = Grid::open(5, 1).unwrap();
        assert_eq!(col.exit(), Coord::new(4, 0));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(Grid::open(0, 3), Err(GridError::Empty));
    }

    #[test]
    fn ragged_rejected() {
        let err = Grid::from_rows(vec![vec![O, O], vec![O, O], vec![O]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "grid row 2 has 1 cells, expected 2");
    }

    #[test]
    fn too_large_rejected() {
        let err = Grid::open(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));
    }

    #[test]
    fn from_fn_and_rows() {
        let g = Grid::from_fn(3, 3, |c| CellState::from(c.row == c.col)).unwrap();
        let rows: Vec<String> = g
            .rows()
            .map(|r| r.iter().map(|c| c.to_char()).collect())
            .collect();
        assert_eq!(rows, vec!["100", "010", "001"]);
        let (c, s) = g.iter().nth(4).unwrap();
        assert_eq!((c, s), (Coord::new(1, 1), X));
    }
}
