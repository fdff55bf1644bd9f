pub mod config;
pub mod log;
pub mod paths;
pub mod render;
pub mod report;
pub mod sieve;

// Re-export commonly used types
pub use config::Config;
pub use report::{RunOptions, RunSummary};
pub use sieve::{Sieve, StepCounter};
