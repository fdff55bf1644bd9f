//! Internal implementation for report orchestration

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use super::{RunOptions, RunSummary, FILE_FAILURE, PROMPT};
use crate::log;
use crate::paths;
use crate::render::{console, FileReport};
use crate::sieve::{self, StepCounter};

pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    out: &mut W,
) -> Result<RunSummary> {
    let bound = match options.bound {
        Some(bound) => bound,
        None => {
            if !options.json {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            read_bound(input)?
        }
    };

    let max_bound = options.config.limits.max_bound;
    if bound > max_bound {
        bail!("Bound {bound} exceeds the configured maximum of {max_bound}");
    }

    let mut steps = StepCounter::new();
    let table = sieve::run(bound, &mut steps);
    log::debug(
        "sieve",
        &format!("bound={bound} count={} steps={}", table.count(), steps.get()),
    );

    if !options.json {
        writeln!(out, "Number of prime numbers below {bound}:  {}", table.count())?;
        writeln!(out, "Printing prime numbers below {bound}.......")?;
        console::print(out, table.flags(), table.count())?;
    }

    let mut file = None;
    let mut file_error = None;
    if options.config.output.write_file {
        let path = paths::report_path(&options.config.output.dir, bound);
        let report = FileReport {
            bound,
            flags: table.flags(),
            count: table.count(),
            steps: steps.get(),
        };
        match report.save(&path) {
            Ok(()) => {
                log::debug("report", &format!("wrote {}", path.display()));
                file = Some(path);
            }
            Err(e) => {
                log::debug("report", &format!("{e:#}"));
                if !options.json {
                    writeln!(out, "{FILE_FAILURE}")?;
                }
                file_error = Some(format!("{e:#}"));
            }
        }
    }

    let summary = RunSummary {
        bound,
        count: table.count(),
        primes: table.primes().collect(),
        steps: steps.get(),
        file,
        file_error,
    };

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "Number of steps taken : {}", summary.steps)?;
    }

    Ok(summary)
}

/// Read the first whitespace-separated token from `input` as the bound
fn read_bound<R: BufRead>(input: &mut R) -> Result<usize> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("No number given on input");
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_bound(token);
        }
    }
}

fn parse_bound(token: &str) -> Result<usize> {
    if token.starts_with('-') {
        bail!("Expected a non-negative integer, got '{token}'");
    }
    token
        .parse()
        .with_context(|| format!("Expected a non-negative integer, got '{token}'"))
}
