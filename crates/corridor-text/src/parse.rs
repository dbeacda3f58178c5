//! Grids built from text.
//!
//! A [`GridParser`] turns a block of text into a [`Grid`]: one row per
//! non-empty line, one cell per character. The blocked character (default
//! `'1'`) marks walls and every other character is passable.

use std::fmt;

use corridor_core::{CellState, Grid, GridError};

/// Parses text maps into grids.
#[derive(Debug, Clone)]
pub struct GridParser {
    blocked: char,
    runes: String,
}

impl Default for GridParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GridParser {
    /// A parser that treats `'1'` as blocked and accepts any character.
    pub fn new() -> Self {
        Self {
            blocked: CellState::BLOCKED_CHAR,
            runes: String::new(),
        }
    }

    /// Use `ch` as the blocked character.
    pub fn with_blocked(mut self, ch: char) -> Self {
        self.blocked = ch;
        self
    }

    /// The character that marks blocked cells.
    pub fn blocked(&self) -> char {
        self.blocked
    }

    /// Set the permitted characters. If non-empty, [`parse`](Self::parse)
    /// rejects any character not in this string. Empty means any character
    /// is allowed.
    pub fn set_runes(&mut self, s: &str) {
        self.runes = s.to_string();
    }

    /// The currently permitted characters.
    pub fn runes(&self) -> &str {
        &self.runes
    }

    /// Parse a text map.
    ///
    /// Empty lines are skipped and a trailing `'\r'` is stripped from each
    /// line. The first remaining line sets the width; every other line must
    /// match it.
    pub fn parse(&self, s: &str) -> Result<Grid, ParseError> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();
        let mut width = 0;

        for line in s.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            let row_idx = rows.len();
            let mut row = Vec::with_capacity(width);
            for (col, ch) in line.chars().enumerate() {
                if !self.runes.is_empty() && !self.runes.contains(ch) {
                    return Err(ParseError::InvalidRune {
                        ch,
                        row: row_idx,
                        col,
                    });
                }
                row.push(CellState::from(ch == self.blocked));
            }
            if row_idx == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(ParseError::InconsistentSize {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        let grid = Grid::from_rows(rows)?;
        log::debug!(
            "parsed {} grid with {} blocked cells",
            grid.dims(),
            grid.blocked_count()
        );
        Ok(grid)
    }
}

/// Parse a text map with the default parser.
pub fn parse_grid(s: &str) -> Result<Grid, ParseError> {
    GridParser::new().parse(s)
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no non-empty lines.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character not in the allowed set was found.
    InvalidRune { ch: char, row: usize, col: usize },
    /// The rows do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: inconsistent size: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, row, col } => write!(
                f,
                "map contains invalid rune \u{201c}{ch}\u{201d} at ({row}, {col})"
            ),
            Self::Grid(e) => write!(f, "map: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
