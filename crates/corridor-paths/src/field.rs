//! Single-source breadth-first distance fields.

use std::collections::VecDeque;
use std::fmt;

use corridor_core::{Coord, Dims, Grid};

use crate::traits::Pather;

/// Sentinel distance meaning "not reached".
///
/// Larger than any real distance, and small enough that adding two of them
/// cannot overflow.
pub const UNREACHABLE: u32 = u32::MAX / 3;

/// Per-cell distances from one source cell.
///
/// Distances count visited cells, so the source itself has distance 1 and
/// each of its neighbours distance 2. Cells that were never reached hold
/// [`UNREACHABLE`]. A field is never modified after [`build`](Self::build)
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FieldParts", into = "FieldParts")
)]
pub struct DistanceField {
    dims: Dims,
    source: Coord,
    dist: Vec<u32>,
    reached: usize,
}

impl DistanceField {
    /// Run a breadth-first search from `source` over `pather`.
    ///
    /// Every cell discovered from a transit-eligible cell receives its final
    /// distance on discovery. Cells for which [`Pather::can_transit`] is
    /// false keep their distance but are never expanded. If `source` lies
    /// outside the pather's bounds, every cell is unreachable.
    pub fn build<P: Pather + ?Sized>(pather: &P, source: Coord) -> Self {
        let dims = pather.dims();
        let mut field = Self {
            dims,
            source,
            dist: vec![UNREACHABLE; dims.len()],
            reached: 0,
        };
        let Some(si) = dims.index(source) else {
            log::warn!("distance field source {source} outside {dims} grid");
            return field;
        };

        let mut visited = vec![false; dims.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

        field.dist[si] = 1;
        field.reached = 1;
        visited[si] = true;
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            let cp = dims.coord(ci);
            // Blocked cells are dead ends: reached, never expanded.
            if !pather.can_transit(cp) {
                continue;
            }
            let next = field.dist[ci] + 1;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = dims.index(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                field.dist[ni] = next;
                field.reached += 1;
                queue.push_back(ni);
            }
        }

        log::trace!(
            "distance field from {source}: reached {} of {} cells",
            field.reached,
            dims.len()
        );
        field
    }

    /// Dimensions of the field.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The cell the search started from.
    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    /// Distance at `c`.
    ///
    /// Returns [`UNREACHABLE`] if `c` is outside the field or was not reached.
    #[inline]
    pub fn at(&self, c: Coord) -> u32 {
        match self.dims.index(c) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Distance at `c`, or `None` if unreached or out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<u32> {
        let d = self.at(c);
        (d != UNREACHABLE).then_some(d)
    }

    /// Whether the search reached `c`.
    #[inline]
    pub fn is_reached(&self, c: Coord) -> bool {
        self.at(c) != UNREACHABLE
    }

    /// Number of reached cells, the source included.
    #[inline]
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Largest finite distance, or `None` for a field that reached nothing.
    pub fn max_distance(&self) -> Option<u32> {
        self.dist.iter().copied().filter(|&d| d != UNREACHABLE).max()
    }

    /// Row-major iterator over reached cells and their distances.
    pub fn iter_reached(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        self.dims
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
    }

    /// Raw row-major distances.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.dist
    }
}

/// Raw contents of a [`DistanceField`], checked by
/// [`DistanceField::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldParts {
    pub dims: Dims,
    pub source: Coord,
    pub dist: Vec<u32>,
    pub reached: usize,
}

impl DistanceField {
    /// Rebuild a field from raw parts, rejecting anything
    /// [`build`](Self::build) could not have produced.
    pub fn from_parts(parts: FieldParts) -> Result<Self, FieldError> {
        let FieldParts {
            dims,
            source,
            dist,
            reached,
        } = parts;
        let cells = dims.height.checked_mul(dims.width).unwrap_or(usize::MAX);
        if cells == 0 || cells > Grid::MAX_CELLS {
            return Err(FieldError::BadDims(dims));
        }
        if dist.len() != cells {
            return Err(FieldError::LengthMismatch {
                expected: cells,
                found: dist.len(),
            });
        }
        if let Some((idx, &d)) = dist
            .iter()
            .enumerate()
            .find(|&(_, &d)| d != UNREACHABLE && (d == 0 || d as usize > cells))
        {
            return Err(FieldError::BadDistance {
                at: dims.coord(idx),
                distance: d,
            });
        }
        let counted = dist.iter().filter(|&&d| d != UNREACHABLE).count();
        if counted != reached {
            return Err(FieldError::ReachedMismatch {
                expected: counted,
                found: reached,
            });
        }
        Ok(Self {
            dims,
            source,
            dist,
            reached,
        })
    }
}

impl TryFrom<FieldParts> for DistanceField {
    type Error = FieldError;

    fn try_from(parts: FieldParts) -> Result<Self, FieldError> {
        Self::from_parts(parts)
    }
}

impl From<DistanceField> for FieldParts {
    fn from(f: DistanceField) -> Self {
        Self {
            dims: f.dims,
            source: f.source,
            dist: f.dist,
            reached: f.reached,
        }
    }
}

/// Errors from rebuilding a [`DistanceField`] out of raw parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Zero cells, or more than a grid may hold.
    BadDims(Dims),
    /// The distance buffer does not cover the dimensions exactly.
    LengthMismatch { expected: usize, found: usize },
    /// A distance that is neither [`UNREACHABLE`] nor in `1..=cells`.
    BadDistance { at: Coord, distance: u32 },
    /// The stored reached count disagrees with the distances.
    ReachedMismatch { expected: usize, found: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDims(d) => write!(f, "distance field has unsupported size {d}"),
            Self::LengthMismatch { expected, found } => write!(
                f,
                "distance field has {found} entries, expected {expected}"
            ),
            Self::BadDistance { at, distance } => {
                write!(f, "distance field has invalid distance {distance} at {at}")
            }
            Self::ReachedMismatch { expected, found } => write!(
                f,
                "distance field claims {found} reached cells, has {expected}"
            ),
        }
    }
}

impl std::error::Error for FieldError {}
