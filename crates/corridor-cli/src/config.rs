//! Search configuration: an optional JSON file, overridden by flags.

use std::fs;
use std::path::Path;

use corridor_paths::{MeetPolicy, SearchConfig};

/// Flag overrides applied on top of the file configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub concurrent: bool,
    pub any_cell: bool,
}

/// Load a [`SearchConfig`] from `path` (if given) and apply `overrides`.
///
/// Missing keys in the file keep their default values.
pub fn load(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<SearchConfig, Box<dyn std::error::Error>> {
    let mut cfg = match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .map_err(|e| format!("reading config {}: {e}", p.display()))?;
            parse(&text)?
        }
        None => SearchConfig::default(),
    };
    apply(&mut cfg, overrides);
    log::debug!("search config: {cfg:?}");
    Ok(cfg)
}

fn parse(text: &str) -> Result<SearchConfig, serde_json::Error> {
    serde_json::from_str(text)
}

fn apply(cfg: &mut SearchConfig, overrides: Overrides) {
    if overrides.concurrent {
        cfg.concurrent = true;
    }
    if overrides.any_cell {
        cfg.policy = MeetPolicy::AnyCell;
    }
}
