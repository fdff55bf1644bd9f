//! Internal implementation for the sieve engine

use super::StepCounter;

/// Primality flags that can only ever be cleared.
///
/// Entries start out `true` and the sole mutation is [`Flags::clear`],
/// so a composite can never be restored to prime.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Flags(Vec<bool>);

impl Flags {
    fn all_set(len: usize) -> Self {
        Self(vec![true; len])
    }

    fn clear(&mut self, index: usize) {
        self.0[index] = false;
    }

    fn is_set(&self, index: usize) -> bool {
        self.0[index]
    }
}

/// Result of sieving `[0, bound)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    bound: usize,
    flags: Flags,
    count: usize,
}

impl Sieve {
    /// Build the table for `[0, bound)`.
    ///
    /// Steps counted:
    /// - one per allocated slot (`max(bound + 1, 2)` slots)
    /// - two for clearing 0 and 1
    /// - one per candidate `i` in `2..bound`
    /// - one per multiple cleared
    /// - one per index in `2..bound` during the final tally
    pub(super) fn build(bound: usize, steps: &mut StepCounter) -> Self {
        // At least two slots so 0 and 1 are always addressable.
        let len = bound.saturating_add(1).max(2);
        let mut flags = Flags::all_set(len);
        steps.add(len as u64);

        flags.clear(0);
        flags.clear(1);
        steps.add(2);

        for i in 2..bound {
            steps.tick();
            if !flags.is_set(i) {
                continue;
            }
            for j in (i.saturating_add(i)..bound).step_by(i) {
                steps.tick();
                flags.clear(j);
            }
        }

        let mut count = 0;
        for i in 2..bound {
            steps.tick();
            if flags.is_set(i) {
                count += 1;
            }
        }

        Self {
            bound,
            flags,
            count,
        }
    }

    /// Upper bound (exclusive) the table was built for
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Number of primes strictly below the bound
    pub fn count(&self) -> usize {
        self.count
    }

    /// Read-only view of the whole allocation.
    ///
    /// Holds `max(bound + 1, 2)` entries; the trailing slot at `bound` is
    /// allocated but never examined.
    pub fn flags(&self) -> &[bool] {
        &self.flags.0
    }

    /// Whether `n` is a prime below the bound
    pub fn is_prime(&self, n: usize) -> bool {
        n < self.bound && self.flags.is_set(n)
    }

    /// Primes below the bound, in increasing order
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        (2..self.bound).filter(move |&i| self.flags.is_set(i))
    }
}
