//! Rendering results, grids and distance fields as text.

use corridor_core::Grid;
use corridor_paths::{DistanceField, ShortestPath};

/// Text printed when entrance and exit are not connected.
pub const NO_PATH: &str = "No Path";

/// The path length, or [`NO_PATH`].
pub fn format_outcome(outcome: ShortestPath) -> String {
    match outcome {
        ShortestPath::Length(n) => n.to_string(),
        ShortestPath::NoPath => NO_PATH.to_string(),
    }
}

/// The grid in the `0`/`1` map format, one line per row.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|c| c.to_char()));
        out.push('\n');
    }
    out
}

/// A right-aligned table of distances, `.` for unreached cells.
pub fn render_field(field: &DistanceField) -> String {
    let width = field.max_distance().map_or(1, |d| d.to_string().len());
    let dims = field.dims();
    let mut out = String::new();
    for c in dims {
        if c.col > 0 {
            out.push(' ');
        }
        match field.get(c) {
            Some(d) => out.push_str(&format!("{d:>width$}")),
            None => out.push_str(&format!("{:>width$}", ".")),
        }
        if c.col + 1 == dims.width {
            out.push('\n');
        }
    }
    out
}
