//! Presentation layer - console and file renderers over a sieve table
//!
//! Both renderers read the same `(flags, count)` pair and share one
//! selection rule, [`listed`]. Neither can mutate the table.

pub mod console;
pub mod file;

pub use file::FileReport;

/// Indices a renderer should emit, in increasing order.
///
/// Scans `[0, flags.len() - 1)`, which is `[0, bound)` for a table of
/// `bound + 1` slots, and stops after `count` hits. A `count` larger than
/// the number of set flags yields only the flags that are set.
pub fn listed(flags: &[bool], count: usize) -> impl Iterator<Item = usize> + '_ {
    let end = flags.len().saturating_sub(1);
    flags[..end]
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .map(|(i, _)| i)
        .take(count)
}
