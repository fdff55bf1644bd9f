//! File renderer - plain-text report of the primes below a bound
//!
//! Layout:
//!
//! ```text
//! Amount of Prime Numbers below 30: 10
//! ------------------------------------------------------
//! Prime numbers below 30
//! ------------------------------------------------------
//! 2 , 3 , 5 , 7 , 11 , 13 , 17 , 19 , 23 , 29
//! ------------------------------------------------------
//! Number of steps taken to calculate prime number: 119
//! ```
//!
//! Ten primes per line. The footer has no trailing newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::listed;

pub const SEPARATOR: &str = "------------------------------------------------------";

/// Primes per line in the grid
pub const PER_LINE: usize = 10;

/// Everything the file renderer needs, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct FileReport<'a> {
    pub bound: usize,
    pub flags: &'a [bool],
    pub count: usize,
    pub steps: u64,
}

impl FileReport<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Amount of Prime Numbers below {}: {}\n",
            self.bound, self.count
        ));
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Prime numbers below {}\n", self.bound));
        out.push_str(SEPARATOR);
        out.push('\n');

        let mut written = 0;
        for prime in listed(self.flags, self.count) {
            if written > 0 {
                out.push_str(if written % PER_LINE == 0 { "\n" } else { " , " });
            }
            out.push_str(&prime.to_string());
            written += 1;
        }
        if written > 0 {
            out.push('\n');
        }

        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!(
            "Number of steps taken to calculate prime number: {}",
            self.steps
        ));
        out
    }

    /// Create (or truncate) `path` and write the report into it.
    ///
    /// The handle is dropped, and so closed, on every return path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.render().as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::{self, Sieve, StepCounter};
    use tempfile::TempDir;

    fn table(bound: usize) -> (Sieve, u64) {
        let mut steps = StepCounter::new();
        let sieve = sieve::run(bound, &mut steps);
        (sieve, steps.get())
    }

    fn report(sieve: &Sieve, steps: u64) -> FileReport<'_> {
        FileReport {
            bound: sieve.bound(),
            flags: sieve.flags(),
            count: sieve.count(),
            steps,
        }
    }

    fn grid_lines(text: &str) -> Vec<&str> {
        let lines: Vec<&str> = text.lines().collect();
        // Between the second and third separators
        lines[4..lines.len() - 2].to_vec()
    }

    #[test]
    fn test_render_below_ten() {
        let (sieve, steps) = table(10);
        let text = report(&sieve, steps).render();

        let expected = format!(
            "Amount of Prime Numbers below 10: 4\n{SEPARATOR}\nPrime numbers below 10\n{SEPARATOR}\n2 , 3 , 5 , 7\n{SEPARATOR}\nNumber of steps taken to calculate prime number: 34"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_no_primes() {
        let (sieve, steps) = table(2);
        let text = report(&sieve, steps).render();

        assert!(text.starts_with("Amount of Prime Numbers below 2: 0\n"));
        assert!(grid_lines(&text).is_empty());
        assert!(text.ends_with("Number of steps taken to calculate prime number: 5"));
    }

    #[test]
    fn test_ten_per_line() {
        // 25 primes below 100
        let (sieve, steps) = table(100);
        assert_eq!(sieve.count(), 25);

        let text = report(&sieve, steps).render();
        let grid = grid_lines(&text);

        assert_eq!(grid.len(), 3);
        let widths: Vec<usize> = grid.iter().map(|l| l.split(" , ").count()).collect();
        assert_eq!(widths, vec![10, 10, 5]);
        assert!(grid[1].starts_with("31 , "));
        assert!(grid[2].ends_with("97"));
    }

    #[test]
    fn test_exactly_ten_primes_single_line() {
        let (sieve, steps) = table(30);
        let text = report(&sieve, steps).render();

        assert_eq!(
            grid_lines(&text),
            vec!["2 , 3 , 5 , 7 , 11 , 13 , 17 , 19 , 23 , 29"]
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let (sieve, steps) = table(200);
        let r = report(&sieve, steps);
        assert_eq!(r.render(), r.render());
    }

    #[test]
    fn test_count_larger_than_table() {
        let (sieve, steps) = table(10);
        let r = FileReport {
            count: 40,
            ..report(&sieve, steps)
        };
        assert_eq!(grid_lines(&r.render()), vec!["2 , 3 , 5 , 7"]);
    }

    #[test]
    fn test_save_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let (sieve, steps) = table(10);
        let r = report(&sieve, steps);

        r.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), r.render());
    }

    #[test]
    fn test_save_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.txt");
        let (sieve, steps) = table(10);

        let err = report(&sieve, steps).save(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
        assert!(!path.exists());
    }
}
