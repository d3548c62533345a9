//! Fibonacci term strategies
//!
//! Terms are `u64`. F(93) = 12200160415121876738 is the last one that fits,
//! so every index above [`MAX_INDEX`] is rejected with
//! [`SequenceError::Overflow`] instead of wrapping.

use crate::{Fibonacci, SequenceError};
use tracing::debug;

/// Largest index whose term fits in a `u64`
pub const MAX_INDEX: i64 = 93;

/// Rolling-pair accumulation: O(n) time, O(1) space
pub struct IterativeFibonacci;

impl Fibonacci for IterativeFibonacci {
    fn term(&self, n: i64) -> Result<u64, SequenceError> {
        let steps = checked_index(n)?;

        // `next` goes to None once F(k+1) stops fitting; that only happens
        // after the last step for indices up to MAX_INDEX.
        let mut current: u64 = 0;
        let mut next: Option<u64> = Some(1);
        for _ in 0..steps {
            let following = next.ok_or(SequenceError::Overflow {
                index: n,
                max: MAX_INDEX,
            })?;
            next = current.checked_add(following);
            current = following;
        }
        Ok(current)
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}

/// Direct recursive decomposition: O(φⁿ) time, O(n) stack depth
pub struct RecursiveFibonacci;

impl Fibonacci for RecursiveFibonacci {
    fn term(&self, n: i64) -> Result<u64, SequenceError> {
        let index = checked_index(n)?;
        recurse(index).ok_or(SequenceError::Overflow {
            index: n,
            max: MAX_INDEX,
        })
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

fn recurse(n: u32) -> Option<u64> {
    if n <= 1 {
        return Some(u64::from(n));
    }
    recurse(n - 1)?.checked_add(recurse(n - 2)?)
}

/// F(n) by accumulation
pub fn fibonacci_iterative(n: i64) -> Result<u64, SequenceError> {
    IterativeFibonacci.term(n)
}

/// F(n) by recursion
pub fn fibonacci_recursive(n: i64) -> Result<u64, SequenceError> {
    RecursiveFibonacci.term(n)
}

fn checked_index(n: i64) -> Result<u32, SequenceError> {
    if n < 0 {
        debug!(index = n, "rejecting negative Fibonacci index");
        return Err(SequenceError::InvalidArgument { index: n });
    }
    if n > MAX_INDEX {
        debug!(index = n, max = MAX_INDEX, "rejecting Fibonacci index past u64 range");
        return Err(SequenceError::Overflow {
            index: n,
            max: MAX_INDEX,
        });
    }
    // Bounded by MAX_INDEX above
    Ok(n as u32)
}
