//! Configuration for prime-below
//!
//! Loaded from TOML. Every section and field has a default, so an empty
//! or partial file is valid.
//!
//! ```toml
//! [output]
//! dir = "reports"
//! write_file = true
//!
//! [limits]
//! max_bound = 100000000
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::log;
use crate::paths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the report file is written into
    pub dir: PathBuf,
    /// Write `PrimeNumberBelow<n>.txt` at all
    pub write_file: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            write_file: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted upper bound
    pub max_bound: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_bound: 100_000_000,
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid prime-below config")
    }

    /// Load from a specific file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise the first existing file in
    /// [`paths::config_candidates`] wins, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            log::debug("config", &format!("loading {}", path.display()));
            return Self::load_from(path);
        }

        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        for candidate in paths::config_candidates(&cwd) {
            if candidate.is_file() {
                log::debug("config", &format!("loading {}", candidate.display()));
                return Self::load_from(&candidate);
            }
        }

        log::debug("config", "no config file found, using defaults");
        Ok(Self::default())
    }
}
