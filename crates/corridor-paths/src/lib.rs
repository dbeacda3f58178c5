//! Two-pass shortest-path search on corridor grids.
//!
//! The search runs a breadth-first pass from the entrance and another from
//! the exit, each producing a [`DistanceField`], then combines the two:
//!
//! - **Distance fields** count visited cells from one source
//!   ([`DistanceField::build`]). Blocked cells are reached but never
//!   expanded.
//! - **Combining** picks the cell minimising `forward + backward - 1`
//!   ([`combine`], [`combine_detailed`]), subject to a [`MeetPolicy`].
//! - **The pipeline** ([`Search`], [`shortest_path`]) wires the two passes
//!   and the combine step together, optionally running the passes on two
//!   threads.
//!
//! Movement rules are supplied through the [`Pather`] trait, which
//! [`corridor_core::Grid`] implements.

mod combine;
mod field;
mod search;
mod traits;

pub use combine::{MeetPolicy, Meeting, ShortestPath, combine, combine_detailed};
pub use field::{DistanceField, FieldError, FieldParts, UNREACHABLE};
pub use search::{Search, SearchConfig, shortest_path, shortest_path_with};
pub use traits::Pather;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use corridor_core::Grid;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig {
            concurrent: true,
            policy: MeetPolicy::AnyCell,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"concurrent":true,"policy":"any_cell"}"#);
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn config_fields_default() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        assert_eq!(cfg.policy, MeetPolicy::Strict);
    }

    #[test]
    fn field_round_trip() {
        let g = Grid::open(3, 2).unwrap();
        let f = DistanceField::build(&g, g.exit());
        let json = serde_json::to_string(&f).unwrap();
        let back: DistanceField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn malformed_fields_rejected() {
        let short = r#"{"dims":{"height":2,"width":2},"source":{"row":0,"col":0},"dist":[1],"reached":1}"#;
        assert!(serde_json::from_str::<DistanceField>(short).is_err());
        let flat = r#"{"dims":{"height":2,"width":0},"source":{"row":0,"col":0},"dist":[],"reached":0}"#;
        assert!(serde_json::from_str::<DistanceField>(flat).is_err());
        let overflow = r#"{"dims":{"height":1,"width":2},"source":{"row":0,"col":0},"dist":[4294967295,4294967295],"reached":2}"#;
        assert!(serde_json::from_str::<DistanceField>(overflow).is_err());
    }
}
