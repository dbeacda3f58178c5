//! `corridor`: shortest paths through 0/1 maps, plus the bundled step
//! counter and bid scan.
//!
//! Usage:
//!   corridor path 0010 0000 1100
//!   corridor path --file maze.txt --show-fields
//!   corridor steps -15
//!   corridor bids bids.csv

mod config;

use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use corridor_calc::{TopBids, parse_bid_line, steps_to_one};
use corridor_paths::{Search, SearchConfig};
use corridor_text::{GridParser, ParseError, format_outcome, render_field};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest entrance-to-exit path through a map of 0 (open) and 1 (wall)
    ///
    /// By default the two searches may only meet on an open cell or an
    /// endpoint, so a path never crosses a wall even when both sides reach
    /// it. Pass --any-cell to let any cell reached from both ends count.
    Path {
        /// Map rows; read from --file or stdin when omitted
        rows: Vec<String>,

        /// Read the map from a file
        #[arg(short, long, conflicts_with = "rows")]
        file: Option<PathBuf>,

        /// JSON search configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Character that marks walls
        #[arg(long, default_value_t = '1')]
        blocked: char,

        /// Run the forward and backward passes on two threads
        #[arg(long)]
        concurrent: bool,

        /// Let any cell reached from both ends join the path, walls included
        #[arg(long)]
        any_cell: bool,

        /// Print both distance fields before the result
        #[arg(long)]
        show_fields: bool,
    },
    /// Fewest +1/-1/÷2 operations that bring N to 1
    Steps {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Highest bidders and the second-highest bid from `id,amount` rows
    Bids {
        /// CSV file; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/// Parse `text` and render the search result, preceded by both distance
/// fields when `show_fields` is set.
fn path_report(
    text: &str,
    blocked: char,
    cfg: &SearchConfig,
    show_fields: bool,
) -> Result<String, ParseError> {
    let grid = GridParser::new().with_blocked(blocked).parse(text)?;
    let search = Search::run(&grid, cfg);

    let mut out = String::new();
    if show_fields {
        let _ = writeln!(out, "forward from {}:", search.forward.source());
        out.push_str(&render_field(&search.forward));
        let _ = writeln!(out, "backward from {}:", search.backward.source());
        out.push_str(&render_field(&search.backward));
        if let Some(m) = search.meeting {
            let _ = writeln!(out, "meeting at {}", m.coord);
        }
    }
    out.push_str(&format_outcome(search.outcome()));
    Ok(out)
}

fn run_path(
    rows: Vec<String>,
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    blocked: char,
    overrides: config::Overrides,
    show_fields: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if rows.is_empty() {
        read_input(file.as_ref())?
    } else {
        rows.join("\n")
    };
    let cfg = config::load(config_path.as_deref(), overrides)?;
    println!("{}", path_report(&text, blocked, &cfg, show_fields)?);
    Ok(())
}

/// Scan `id,amount` rows and return the report lines. Amounts are exact
/// decimals, so large values stay distinct and keep their written scale.
fn bid_report(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut top: TopBids<i64, Decimal> = TopBids::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        match parse_bid_line(&line?) {
            Some((id, amount)) => top.push(id, amount),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::info!("skipped {skipped} rows without a valid id and amount");
    }
    Ok(top.report())
}

fn run_bids(file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let lines = match file {
        Some(p) => {
            let f = fs::File::open(&p).map_err(|e| format!("opening {}: {e}", p.display()))?;
            bid_report(io::BufReader::new(f))?
        }
        None => bid_report(io::stdin().lock())?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Path {
            rows,
            file,
            config: config_path,
            blocked,
            concurrent,
            any_cell,
            show_fields,
        } => run_path(
            rows,
            file,
            config_path,
            blocked,
            config::Overrides {
                concurrent,
                any_cell,
            },
            show_fields,
        ),
        Command::Steps { n } => {
            println!("{}", steps_to_one(n));
            Ok(())
        }
        Command::Bids { file } => run_bids(file),
    }
}
