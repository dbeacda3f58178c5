//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Coordinates are `(row, col)` pairs with the origin at the top-left cell.
//! [`Dims`] describes a `height × width` rectangle and owns the row-major
//! flat-index conversions shared by the grid and every distance field.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours that lie inside `dims`, in the order
    /// up, left, down, right. Missing neighbours are `None`.
    #[inline]
    pub fn neighbors_4(self, dims: Dims) -> [Option<Coord>; 4] {
        let up = self.row.checked_sub(1).map(|r| Self::new(r, self.col));
        let left = self.col.checked_sub(1).map(|c| Self::new(self.row, c));
        let down = (self.row + 1 < dims.height).then(|| Self::new(self.row + 1, self.col));
        let right = (self.col + 1 < dims.width).then(|| Self::new(self.row, self.col + 1));
        [up, left, down, right]
    }

    /// Manhattan (L1) distance to `other`, counted in moves.
    #[inline]
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Rectangle dimensions: `height` rows of `width` columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub height: usize,
    pub width: usize,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.height * self.width
    }

    /// Whether the rectangle has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Whether `c` lies inside the rectangle.
    #[inline]
    pub const fn contains(self, c: Coord) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// Convert a coordinate to a row-major flat index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.width + c.col)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// `idx` must be smaller than [`len`](Self::len).
    #[inline]
    pub const fn coord(self, idx: usize) -> Coord {
        Coord::new(idx / self.width, idx % self.width)
    }

    /// The bottom-right cell. Meaningless for empty dimensions.
    #[inline]
    pub const fn last(self) -> Coord {
        Coord::new(self.height.saturating_sub(1), self.width.saturating_sub(1))
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> CoordIter {
        CoordIter {
            dims: self,
            next: 0,
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = CoordIter;
    #[inline]
    fn into_iter(self) -> CoordIter {
        self.iter()
    }
}

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct CoordIter {
    dims: Dims,
    next: usize,
}

impl Iterator for CoordIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.dims.len() {
            return None;
        }
        let c = self.dims.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.dims.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for CoordIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_interior() {
        let n = Coord::new(1, 1).neighbors_4(Dims::new(3, 3));
        assert_eq!(
            n,
            [
                Some(Coord::new(0, 1)),
                Some(Coord::new(1, 0)),
                Some(Coord::new(2, 1)),
                Some(Coord::new(1, 2)),
            ]
        );
    }

    #[test]
    fn neighbors_corners() {
        let d = Dims::new(3, 4);
        let tl: Vec<_> = Coord::ORIGIN.neighbors_4(d).into_iter().flatten().collect();
        assert_eq!(tl, vec![Coord::new(1, 0), Coord::new(0, 1)]);
        let br: Vec<_> = d.last().neighbors_4(d).into_iter().flatten().collect();
        assert_eq!(br, vec![Coord::new(1, 3), Coord::new(2, 2)]);
    }

    #[test]
    fn neighbors_single_cell() {
        let n = Coord::ORIGIN.neighbors_4(Dims::new(1, 1));
        assert!(n.iter().all(Option::is_none));
    }

    #[test]
    fn index_round_trip() {
        let d = Dims::new(3, 5);
        for (i, c) in d.iter().enumerate() {
            assert_eq!(d.index(c), Some(i));
            assert_eq!(d.coord(i), c);
        }
        assert_eq!(d.index(Coord::new(3, 0)), None);
        assert_eq!(d.index(Coord::new(0, 5)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let cs: Vec<_> = Dims::new(2, 2).into_iter().collect();
        assert_eq!(
            cs,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
        assert!(cs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn manhattan_and_display() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 3)), 5);
        assert_eq!(Coord::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(Dims::new(2, 3).to_string(), "2x3");
    }
}
