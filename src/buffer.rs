//! Implementations of the prime cache and the queries answered from it

use crate::traits::{PrimeBuffer, PrimeInt};
use num_traits::{One, Zero};
use tracing::trace;

/// Return whether value < p * p, computed without forming the square
#[inline]
fn below_square<T: PrimeInt>(value: T, p: T) -> bool {
    value / p < p
}

#[inline]
fn two<T: PrimeInt>() -> T {
    T::one() + T::one()
}

/// Queries on a [PrimeBuffer]. Every method extends the buffer only as far as needed
/// to answer it, and the found primes stay in the buffer for later calls.
///
/// Threading one buffer through a sequence of queries is what makes them cheap. The
/// standalone functions in [crate::nt_funcs] create a throwaway buffer per call and
/// rediscover every prime each time.
pub trait PrimeBufferExt<T: PrimeInt>: PrimeBuffer<T> {
    /// Return the prime at 0-based `index` (index 0 is 2)
    fn nth_prime(&mut self, index: usize) -> T {
        while self.len() <= index {
            self.append_next();
        }
        self.primes()[index]
    }

    /// Extend the buffer until its largest prime is at least `limit`
    fn reserve_until(&mut self, limit: T) {
        while self.largest().map_or(true, |p| p < limit) {
            self.append_next();
        }
    }

    /// Return the 0-based position of `value` in the prime sequence.
    ///
    /// `value` must be a prime. This is checked in debug builds only; in release builds
    /// the result for a non-prime is unspecified.
    fn index_of_prime(&mut self, value: T) -> usize {
        self.reserve_until(value);
        let found = self.primes().binary_search(&value);
        debug_assert!(found.is_ok(), "{} is not a prime", value);
        match found {
            Ok(i) | Err(i) => i,
        }
    }

    /// Return the smallest prime strictly greater than the prime `value`
    fn next_prime_after(&mut self, value: T) -> T {
        let index = self.index_of_prime(value);
        self.nth_prime(index + 1)
    }

    /// Test whether candidate is a prime by trial division.
    ///
    /// Unlike looking the candidate up with [index_of_prime][Self::index_of_prime], this
    /// only extends the buffer up to the first prime whose square exceeds the candidate.
    fn is_prime(&mut self, candidate: T) -> bool {
        if candidate < two() {
            return false;
        }
        if self.contains(candidate) {
            return true;
        }

        let mut index = 0;
        loop {
            let divisor = self.nth_prime(index);
            if below_square(candidate, divisor) {
                return true;
            }
            if candidate.is_multiple_of(&divisor) {
                return false;
            }
            index += 1;
        }
    }

    /// Return the prime factors of `n` in non-decreasing order, with repetition.
    ///
    /// 0 and 1 have no prime factorization and are returned as `[n]`. Trial division
    /// stops once the residual is smaller than the square of the divisor, and a
    /// residual greater than 1 is then taken as the last factor directly.
    fn prime_factors(&mut self, n: T) -> Vec<T> {
        if n.is_zero() || n.is_one() || self.contains(n) {
            return vec![n];
        }

        let mut residual = n;
        let mut factors = Vec::new();
        let mut index = 0;
        let mut divisor = self.nth_prime(index);
        while !below_square(residual, divisor) {
            while residual.is_multiple_of(&divisor) {
                residual = residual / divisor;
                factors.push(divisor);
            }
            index += 1;
            divisor = self.nth_prime(index);
        }
        if residual > T::one() {
            factors.push(residual);
        }
        factors
    }
}

impl<T: PrimeInt, B: PrimeBuffer<T>> PrimeBufferExt<T> for B {}

/// PrimeCache grows a list of primes by trial division against the primes it already holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCache<T> {
    list: Vec<T>, // found primes, ascending and gap free
}

impl<T: PrimeInt> PrimeCache<T> {
    #[inline]
    pub fn new() -> Self {
        PrimeCache { list: Vec::new() }
    }

    /// Create an empty cache with room for `capacity` primes before reallocating
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        PrimeCache {
            list: Vec::with_capacity(capacity),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.list
    }

    // Odd candidates only; running out of the integer type is fatal.
    fn next_odd(candidate: T) -> T {
        match candidate.checked_add(&two()) {
            Some(next) => next,
            None => panic!("prime candidate overflowed after {}", candidate),
        }
    }

    fn search_after(&self, last: T) -> T {
        let mut candidate = Self::next_odd(last);
        'candidates: loop {
            for &p in &self.list {
                if below_square(candidate, p) {
                    return candidate;
                }
                if candidate.is_multiple_of(&p) {
                    candidate = Self::next_odd(candidate);
                    continue 'candidates;
                }
            }
            // there is always a prime between last and 2 * last, which is below last^2
            unreachable!("no prime found after {}", last);
        }
    }
}

impl<T: PrimeInt> Default for PrimeCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for PrimeCache<T> {
    fn as_ref(&self) -> &[T] {
        &self.list
    }
}

impl<T: PrimeInt> PrimeBuffer<T> for PrimeCache<T> {
    fn primes(&self) -> &[T] {
        &self.list
    }

    fn append_next(&mut self) -> T {
        let next = match self.list.last() {
            None => two(),
            Some(_) if self.list.len() == 1 => two::<T>() + T::one(),
            Some(&last) => self.search_after(last),
        };
        self.list.push(next);
        trace!(prime = %next, count = self.list.len(), "appended prime");
        next
    }
}
