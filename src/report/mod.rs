//! Report orchestration - one run from input bound to printed step count
//!
//! Reads the bound (from options or the input stream), sieves, prints the
//! count and the prime list, writes the report file, and finishes with the
//! step counter. A failed report file is noted on the output and the run
//! still succeeds.

mod internal;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;

/// Prompt shown when no bound was supplied up front
pub const PROMPT: &str = "Enter a number greater than 2 : ";

/// Line printed when the report file cannot be produced
pub const FILE_FAILURE: &str = "Failed to create file";

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Upper bound; read from input when `None`
    pub bound: Option<usize>,
    /// Emit a JSON summary instead of the human-readable lines
    pub json: bool,
    pub config: Config,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub bound: usize,
    pub count: usize,
    pub primes: Vec<usize>,
    pub steps: u64,
    /// Report file written, if any
    pub file: Option<PathBuf>,
    /// Why the report file could not be written
    pub file_error: Option<String>,
}

/// Execute one run against the given input and output streams
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    out: &mut W,
) -> Result<RunSummary> {
    internal::run(options, input, out)
}
