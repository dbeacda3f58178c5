use corridor_core::{Coord, Dims, Grid};

/// Movement rules for a distance-field search.
///
/// The search asks [`can_transit`](Pather::can_transit) before expanding a
/// cell, so a pather may report neighbours of a cell it never lets the
/// search leave.
pub trait Pather {
    /// Dimensions of the searched rectangle.
    fn dims(&self) -> Dims;

    /// Append in-bounds neighbours of `c` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);

    /// Whether the search may move on from `c` once it has reached it.
    fn can_transit(&self, c: Coord) -> bool;
}

impl Pather for Grid {
    #[inline]
    fn dims(&self) -> Dims {
        Grid::dims(self)
    }

    #[inline]
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(c.neighbors_4(Grid::dims(self)).into_iter().flatten());
    }

    #[inline]
    fn can_transit(&self, c: Coord) -> bool {
        !self.is_blocked(c)
    }
}
