//! Debug logging to stderr, off unless `PRIME_BELOW_LOG` is set.
//!
//! Stdout carries the program's report, so nothing here ever touches it.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

/// Environment variable that turns debug logging on
pub const LOG_ENV_VAR: &str = "PRIME_BELOW_LOG";

static FORCED: AtomicBool = AtomicBool::new(false);

/// Turn logging on for the rest of the process (`--verbose`)
pub fn enable() {
    FORCED.store(true, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    FORCED.load(Ordering::Relaxed) || std::env::var_os(LOG_ENV_VAR).is_some()
}

/// Log `msg` under `scope`, e.g. `[DEBUG sieve] built table`
pub fn debug(scope: &str, msg: &str) {
    if enabled() {
        let prefix = format!("[DEBUG {scope}]");
        eprintln!("{} {}", prefix.as_str().dimmed(), msg);
    }
}
