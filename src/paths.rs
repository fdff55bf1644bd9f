//! Where prime-below reads config from and writes reports to.
//!
//! ```text
//! ./prime-below.toml                # project config (checked first)
//! ~/.prime-below/config.toml        # user config
//! <output.dir>/PrimeNumberBelow<n>.txt
//! ```

use std::path::{Path, PathBuf};

/// Config file name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "prime-below.toml";

/// User-level directory: `~/.prime-below/`
pub fn user_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".prime-below")
}

/// User-level config: `~/.prime-below/config.toml`
pub fn user_config_path() -> PathBuf {
    user_home().join("config.toml")
}

/// Config candidates in lookup order
pub fn config_candidates(cwd: &Path) -> Vec<PathBuf> {
    vec![cwd.join(LOCAL_CONFIG_FILE), user_config_path()]
}

/// Report file name for a bound: `PrimeNumberBelow<n>.txt`
pub fn report_file_name(bound: usize) -> String {
    format!("PrimeNumberBelow{bound}.txt")
}

/// Report file location inside `dir`
pub fn report_path(dir: &Path, bound: usize) -> PathBuf {
    dir.join(report_file_name(bound))
}
