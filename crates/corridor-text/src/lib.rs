//! Text adapters for corridor: parse maps into grids, and render search
//! results, grids and distance fields back to text.

mod parse;
mod render;

pub use parse::{GridParser, ParseError, parse_grid};
pub use render::{NO_PATH, format_outcome, render_field, render_grid};
