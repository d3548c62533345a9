//! The fixed-input demo programs.
//!
//! Each binary in `src/bin` is a thin wrapper around one of these, so the
//! exact output can be checked without spawning a process.

use crate::render::{render, Layout};
use crate::sorting::bubble_sort_with_stats;
use crate::Fibonacci;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/// Input sorted by the sort demos
pub const SORT_INPUT: [i32; 5] = [5, 1, 4, 2, 8];

/// Terms printed by the long Fibonacci demos: F(0) through F(49)
pub const LONG_RUN: i64 = 50;

/// Terms printed by the short Fibonacci demo: F(0) through F(9)
pub const SHORT_RUN: i64 = 10;

/// Bubble sort [`SORT_INPUT`] and print the result
pub fn sort_demo<W: Write>(out: &mut W, layout: Layout) -> Result<()> {
    let mut nums = SORT_INPUT;
    let stats = bubble_sort_with_stats(&mut nums, false);
    debug!(?stats, "sorted demo input");
    emit(out, &nums, layout)
}

/// Print F(0) through F(count - 1) computed by `fib`
pub fn fibonacci_demo<F: Fibonacci, W: Write>(
    out: &mut W,
    fib: &F,
    count: i64,
    layout: Layout,
) -> Result<()> {
    let terms = fib
        .terms(0..count)
        .with_context(|| format!("computing {} Fibonacci terms", fib.name()))?;
    debug!(strategy = fib.name(), count, "computed Fibonacci terms");
    emit(out, &terms, layout)
}

fn emit<T: Display, W: Write>(out: &mut W, values: &[T], layout: Layout) -> Result<()> {
    let body = render(values, layout);
    let written = match layout {
        Layout::Lines => write!(out, "{body}"),
        Layout::SpaceSeparated | Layout::Bracketed => writeln!(out, "{body}"),
    };
    written.context("writing demo output")?;
    out.flush().context("flushing demo output")
}
