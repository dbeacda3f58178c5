//! Small self-contained calculations bundled with the corridor tool.
//!
//! - [`steps_to_one`]: fewest `+1`/`-1`/`/2` operations that bring an
//!   integer to 1.
//! - [`TopBids`]: streaming scan for the highest bidders and the
//!   second-highest amount.

pub mod bids;
pub mod steps;

pub use bids::{TopBids, UNDEFINED, parse_bid_line};
pub use steps::{steps_to_one, steps_to_one_recursive};
