//! Merging a forward and a backward distance field into one path length.

use corridor_core::Coord;

use crate::field::{DistanceField, UNREACHABLE};
use crate::traits::Pather;

/// Which cells may serve as the meeting point of the two searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeetPolicy {
    /// Only transit-eligible cells, plus the two search sources. A path may
    /// still start or end on a blocked endpoint but never cross a blocked
    /// interior cell.
    #[default]
    Strict,
    /// Any cell reached by both searches, blocked or not. A blocked cell
    /// reached from both sides joins the two halves, so a wall one cell
    /// thick does not separate them.
    AnyCell,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortestPath {
    /// Number of cells on the path, both endpoints included.
    Length(u32),
    /// Entrance and exit are not connected.
    NoPath,
}

impl ShortestPath {
    /// Integer code used by the textual interface for the no-path case.
    pub const NO_PATH_CODE: i64 = -1;

    /// The path length, if any.
    #[inline]
    pub fn length(self) -> Option<u32> {
        match self {
            Self::Length(n) => Some(n),
            Self::NoPath => None,
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Length(_))
    }

    /// The length as a signed integer, or [`NO_PATH_CODE`](Self::NO_PATH_CODE).
    #[inline]
    pub fn code(self) -> i64 {
        match self {
            Self::Length(n) => i64::from(n),
            Self::NoPath => Self::NO_PATH_CODE,
        }
    }
}

impl From<Option<u32>> for ShortestPath {
    fn from(o: Option<u32>) -> Self {
        o.map_or(Self::NoPath, Self::Length)
    }
}

/// The cell where the best forward and backward distances meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meeting {
    pub coord: Coord,
    pub length: u32,
}

/// Find the cell minimising `forward + backward - 1`.
///
/// Only cells with a finite distance in both fields and accepted by
/// `policy` are candidates. Ties go to the first candidate in row-major
/// order. Returns `None` when no cell qualifies, or when the two fields do
/// not cover the same rectangle.
pub fn combine_detailed<P: Pather + ?Sized>(
    forward: &DistanceField,
    backward: &DistanceField,
    policy: MeetPolicy,
    pather: &P,
) -> Option<Meeting> {
    if forward.dims() != backward.dims() {
        log::warn!(
            "cannot combine distance fields of different sizes ({} vs {})",
            forward.dims(),
            backward.dims()
        );
        return None;
    }
    let dims = forward.dims();
    let endpoints = [forward.source(), backward.source()];

    let mut best: Option<Meeting> = None;
    for (i, (&f, &b)) in forward
        .as_slice()
        .iter()
        .zip(backward.as_slice())
        .enumerate()
    {
        if f == UNREACHABLE || b == UNREACHABLE {
            continue;
        }
        // The meeting cell is counted by both fields.
        let length = f + b - 1;
        if best.is_some_and(|m| m.length <= length) {
            continue;
        }
        let coord = dims.coord(i);
        if policy == MeetPolicy::Strict
            && !pather.can_transit(coord)
            && !endpoints.contains(&coord)
        {
            continue;
        }
        best = Some(Meeting { coord, length });
    }
    best
}

/// Shortest entrance-to-exit length from a forward and a backward field.
pub fn combine<P: Pather + ?Sized>(
    forward: &DistanceField,
    backward: &DistanceField,
    policy: MeetPolicy,
    pather: &P,
) -> ShortestPath {
    combine_detailed(forward, backward, policy, pather)
        .map(|m| m.length)
        .into()
}
