//! Minimum number of `+1`, `-1` and `/2` operations needed to reach 1.
//!
//! Working in binary, only halving moves the highest set bit down, so every
//! optimal sequence halves exactly as often as the bit length requires and
//! only the increments and decrements are left to choose. An odd number is
//! nudged to whichever neighbour is divisible by 4, which turns a run of
//! trailing ones into a single carry. Three is the exception: `3 -> 2 -> 1`
//! beats `3 -> 4 -> 2 -> 1`.

use std::collections::HashMap;

/// Extra operations charged for a negative input.
pub const NEGATIVE_PENALTY: u32 = 2;

/// Minimum operation count for `n`, in `O(log n)` time and constant space.
///
/// A negative `n` costs [`NEGATIVE_PENALTY`] more than its magnitude. Zero
/// takes a single increment. Valid for the whole `i64` range.
pub fn steps_to_one(n: i64) -> u32 {
    if n == 0 {
        return 1;
    }
    let mut steps = if n < 0 { NEGATIVE_PENALTY } else { 0 };
    // |i64::MIN| + 1 still fits in a u64.
    let mut n = n.unsigned_abs();
    while n != 1 && n != 3 {
        if n & 0b1 == 0 {
            n >>= 1;
        } else if n & 0b11 == 1 {
            n -= 1;
        } else {
            n += 1;
        }
        steps += 1;
    }
    if n == 3 {
        steps += 2;
    }
    steps
}

/// Reference recursion with memoisation, for positive `n`.
///
/// `O(log n)` time and memory. Returns `None` for `n == 0`.
pub fn steps_to_one_recursive(n: u64, memo: &mut HashMap<u64, u32>) -> Option<u32> {
    if n == 0 {
        return None;
    }
    Some(recurse(n, memo))
}

fn recurse(n: u64, memo: &mut HashMap<u64, u32>) -> u32 {
    if n == 1 {
        return 0;
    }
    if let Some(&s) = memo.get(&n) {
        return s;
    }
    let s = if n % 2 == 0 {
        recurse(n / 2, memo) + 1
    } else {
        recurse(n - 1, memo).min(recurse(n + 1, memo)) + 1
    };
    memo.insert(n, s);
    s
}
