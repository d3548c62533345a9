//! Classic Algorithm Demos
//!
//! Exchange sort and Fibonacci terms, each behind a small strategy trait so
//! the demo binaries and the benchmark can swap implementations freely.

pub mod demo;
pub mod error;
pub mod fibonacci;
pub mod logging;
pub mod render;
pub mod sorting;

use std::ops::Range;

pub use error::SequenceError;

/// Trait for in-place sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in non-decreasing order
    fn sort<T: Ord>(&self, data: &mut [T]);

    /// Name used in benchmark output
    fn name(&self) -> &'static str;
}

/// Trait for Fibonacci term strategies.
///
/// F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2).
pub trait Fibonacci {
    /// Compute F(n).
    ///
    /// Fails with [`SequenceError::InvalidArgument`] for negative `n` and with
    /// [`SequenceError::Overflow`] when F(n) does not fit in a `u64`.
    fn term(&self, n: i64) -> Result<u64, SequenceError>;

    /// Name used in benchmark output
    fn name(&self) -> &'static str;

    /// Compute every term whose index lies in `range`
    fn terms(&self, range: Range<i64>) -> Result<Vec<u64>, SequenceError> {
        range.map(|n| self.term(n)).collect()
    }
}
