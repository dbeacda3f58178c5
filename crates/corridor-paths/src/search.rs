//! The three-phase pipeline: forward pass, backward pass, combine.

use std::thread;

use corridor_core::{Coord, Grid};

use crate::combine::{MeetPolicy, Meeting, ShortestPath, combine_detailed};
use crate::field::DistanceField;
use crate::traits::Pather;

/// Options for [`Search::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Run the forward and backward passes on two threads.
    pub concurrent: bool,
    /// Which cells may join the two halves of a path.
    pub policy: MeetPolicy,
}

/// A finished two-way search: both distance fields and the best meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub forward: DistanceField,
    pub backward: DistanceField,
    pub meeting: Option<Meeting>,
}

impl Search {
    /// Search a grid from its entrance to its exit.
    pub fn run(grid: &Grid, config: &SearchConfig) -> Self {
        Self::between(grid, grid.entrance(), grid.exit(), config)
    }

    /// Search from `from` to `to` over any pather.
    pub fn between<P: Pather + Sync + ?Sized>(
        pather: &P,
        from: Coord,
        to: Coord,
        config: &SearchConfig,
    ) -> Self {
        let (forward, backward) = if config.concurrent {
            thread::scope(|s| {
                let back = s.spawn(|| DistanceField::build(pather, to));
                let forward = DistanceField::build(pather, from);
                let backward = back
                    .join()
                    .unwrap_or_else(|e| std::panic::resume_unwind(e));
                (forward, backward)
            })
        } else {
            (
                DistanceField::build(pather, from),
                DistanceField::build(pather, to),
            )
        };

        let meeting = combine_detailed(&forward, &backward, config.policy, pather);
        match meeting {
            Some(m) => log::debug!(
                "path {from} -> {to}: {} cells, meeting at {}",
                m.length,
                m.coord
            ),
            None => log::debug!("path {from} -> {to}: not connected"),
        }

        Self {
            forward,
            backward,
            meeting,
        }
    }

    /// The shortest path length, or [`ShortestPath::NoPath`].
    #[inline]
    pub fn outcome(&self) -> ShortestPath {
        self.meeting.map(|m| m.length).into()
    }
}

/// Shortest entrance-to-exit path with the default configuration.
pub fn shortest_path(grid: &Grid) -> ShortestPath {
    shortest_path_with(grid, &SearchConfig::default())
}

/// Shortest entrance-to-exit path.
pub fn shortest_path_with(grid: &Grid, config: &SearchConfig) -> ShortestPath {
    Search::run(grid, config).outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::CellState;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.chars().map(CellState::from_char).collect())
                .collect(),
        )
        .unwrap()
    }

    const MAZE: [&str; 5] = [
        "00000",
        "11110",
        "00000",
        "01111",
        "00000",
    ];

    #[test]
    fn winding_corridor() {
        let g = grid(&MAZE);
        assert_eq!(shortest_path(&g), ShortestPath::Length(17));
    }

    #[test]
    fn single_cell_either_state() {
        assert_eq!(shortest_path(&grid(&["0"])), ShortestPath::Length(1));
        assert_eq!(shortest_path(&grid(&["1"])), ShortestPath::Length(1));
    }

    #[test]
    fn single_row_and_column() {
        assert_eq!(shortest_path(&grid(&["0000"])), ShortestPath::Length(4));
        assert_eq!(shortest_path(&grid(&["0", "0", "0"])), ShortestPath::Length(3));
        assert_eq!(shortest_path(&grid(&["00"])), ShortestPath::Length(2));
    }

    #[test]
    fn blocked_exit_is_a_terminal_step() {
        let g = grid(&["00", "01"]);
        assert_eq!(shortest_path(&g), ShortestPath::Length(3));
    }

    #[test]
    fn blocked_entrance() {
        let g = grid(&["10", "00"]);
        let s = Search::run(&g, &SearchConfig::default());
        // The forward pass never leaves the blocked entrance.
        assert_eq!(s.forward.reached(), 1);
        assert_eq!(s.backward.at(Coord::new(0, 1)), 2);
        assert_eq!(s.backward.at(Coord::new(1, 0)), 2);
        assert_eq!(s.backward.at(Coord::new(0, 0)), 3);
        assert_eq!(s.outcome(), ShortestPath::Length(3));
    }

    #[test]
    fn blocked_entrance_and_exit() {
        // Neither pass can leave its blocked source.
        let g = grid(&["100", "000", "001"]);
        assert_eq!(shortest_path(&g), ShortestPath::NoPath);
    }

    #[test]
    fn partitioned_grid() {
        let g = grid(&["00110", "00110", "00110"]);
        assert_eq!(shortest_path(&g), ShortestPath::NoPath);
        assert_eq!(shortest_path(&g).code(), -1);
    }

    #[test]
    fn concurrent_matches_sequential() {
        let g = grid(&MAZE);
        let seq = Search::run(&g, &SearchConfig::default());
        let par = Search::run(
            &g,
            &SearchConfig {
                concurrent: true,
                ..SearchConfig::default()
            },
        );
        assert_eq!(seq, par);
    }

    #[test]
    fn any_cell_policy_crosses_thin_walls() {
        let g = grid(&MAZE);
        let any = SearchConfig {
            policy: MeetPolicy::AnyCell,
            ..SearchConfig::default()
        };
        let s = Search::run(&g, &any);
        // Meets on the wall cell (1, 0): 2 cells forward, 8 backward.
        assert_eq!(s.outcome(), ShortestPath::Length(9));
        assert_eq!(s.meeting.map(|m| m.coord), Some(Coord::new(1, 0)));
    }

    #[test]
    fn between_arbitrary_cells() {
        let g = Grid::open(4, 4).unwrap();
        let s = Search::between(
            &g,
            Coord::new(1, 1),
            Coord::new(1, 3),
            &SearchConfig::default(),
        );
        assert_eq!(s.outcome(), ShortestPath::Length(3));
    }
}
