//! Single-pass scan for the top bidders and the second-highest bid.
//!
//! Only the best ids and the two best amounts are kept, so any number of
//! bids is processed in `O(n)` time and `O(k)` memory, `k` being the number
//! of ids tied for the top amount. Scans of separate sources can be merged.

use std::fmt;
use std::str::FromStr;

/// Running state of a top-two bid scan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopBids<I, A> {
    best_ids: Vec<I>,
    best: Option<A>,
    second: Option<A>,
}

impl<I, A> Default for TopBids<I, A> {
    fn default() -> Self {
        Self {
            best_ids: Vec::new(),
            best: None,
            second: None,
        }
    }
}

impl<I, A: PartialOrd + Copy> TopBids<I, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one bid. Unordered amounts such as `NaN` are ignored.
    pub fn push(&mut self, id: I, amount: A) {
        if amount.partial_cmp(&amount).is_none() {
            return;
        }
        match self.best {
            Some(best) if amount == best => self.best_ids.push(id),
            Some(best) if amount < best => {
                if self.second.is_none_or(|s| amount > s) {
                    self.second = Some(amount);
                }
            }
            _ => {
                self.second = self.best;
                self.best = Some(amount);
                self.best_ids.clear();
                self.best_ids.push(id);
            }
        }
    }

    /// Fold another scan into this one.
    pub fn merge(&mut self, other: TopBids<I, A>) {
        let Some(other_best) = other.best else {
            return;
        };
        let mut ids = other.best_ids.into_iter();
        if let Some(first) = ids.next() {
            self.push(first, other_best);
        }
        if self.best == Some(other_best) {
            self.best_ids.extend(ids);
        }
        // Below other_best, hence below our best after the push above.
        if let Some(s) = other.second {
            if self.second.is_none_or(|cur| s > cur) {
                self.second = Some(s);
            }
        }
    }

    /// Ids holding the highest amount, in input order.
    pub fn best_ids(&self) -> &[I] {
        &self.best_ids
    }

    /// The highest amount seen.
    pub fn best_amount(&self) -> Option<A> {
        self.best
    }

    /// The highest amount strictly below the best, if any.
    pub fn second_amount(&self) -> Option<A> {
        self.second
    }
}

impl<I: fmt::Display, A: PartialOrd + Copy + fmt::Display> TopBids<I, A> {
    /// One `"id, amount"` line per best id, paired with the second-highest
    /// amount; a single `"undefined"` line when there is no second amount.
    pub fn report(&self) -> Vec<String> {
        match self.second {
            Some(second) => self
                .best_ids
                .iter()
                .map(|id| format!("{id}, {second}"))
                .collect(),
            None => vec![UNDEFINED.to_string()],
        }
    }
}

impl<I, A: PartialOrd + Copy> Extend<(I, A)> for TopBids<I, A> {
    fn extend<T: IntoIterator<Item = (I, A)>>(&mut self, iter: T) {
        for (id, amount) in iter {
            self.push(id, amount);
        }
    }
}

impl<I, A: PartialOrd + Copy> FromIterator<(I, A)> for TopBids<I, A> {
    fn from_iter<T: IntoIterator<Item = (I, A)>>(iter: T) -> Self {
        let mut top = Self::new();
        top.extend(iter);
        top
    }
}

/// Report line when fewer than two distinct amounts were seen.
pub const UNDEFINED: &str = "undefined";

/// Parse an `id,amount` row. Returns `None` when either field is missing
/// or does not parse, which also skips header rows.
pub fn parse_bid_line<I: FromStr, A: FromStr>(line: &str) -> Option<(I, A)> {
    let mut fields = line.split(',').map(str::trim);
    let id = fields.next()?.parse().ok()?;
    let amount = fields.next()?.parse().ok()?;
    Some((id, amount))
}
