//! Sieve engine - primality table for every integer below a bound
//!
//! Classic Sieve of Eratosthenes over the half-open domain `[0, n)`.
//! The engine owns the table it builds and hands out read-only views;
//! nothing downstream can flip a flag back.
//!
//! # Example
//!
//! ```
//! use prime_below::sieve::{self, StepCounter};
//!
//! let mut steps = StepCounter::new();
//! let result = sieve::run(10, &mut steps);
//!
//! assert_eq!(result.count(), 4);
//! assert_eq!(result.primes().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
//! assert_eq!(steps.get(), 34);
//! ```

mod internal;

pub use internal::Sieve;

/// Counter of elementary sieve operations, reported for diagnostics only.
///
/// Threaded through [`run`] by mutable reference instead of living in a
/// global, so several runs can be measured separately or accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounter {
    steps: u64,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one elementary operation
    pub fn tick(&mut self) {
        self.steps += 1;
    }

    /// Record `n` elementary operations at once
    pub fn add(&mut self, n: u64) {
        self.steps += n;
    }

    pub fn get(&self) -> u64 {
        self.steps
    }
}

/// Sieve every integer below `bound` and count the primes found.
///
/// Never fails: bounds of 0 and 1 produce an empty result. Steps are
/// added to `steps` as described on [`Sieve::build`].
pub fn run(bound: usize, steps: &mut StepCounter) -> Sieve {
    internal::Sieve::build(bound, steps)
}
