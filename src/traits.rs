use num_integer::Integer;
use num_traits::{CheckedAdd, Unsigned};
use std::fmt::{Debug, Display};

/// Fixed width unsigned integers the prime cache and the factorizer work on.
///
/// Only unsigned types qualify, so negative inputs are ruled out by the type system
/// instead of by a runtime check.
pub trait PrimeInt: Integer + Unsigned + CheckedAdd + Copy + Display + Debug {}

impl<T: Integer + Unsigned + CheckedAdd + Copy + Display + Debug> PrimeInt for T {}

/// This trait represents an ordered, append-only list of primes that can be extended
/// one prime at a time.
///
/// Implementors must keep the list gap free: if it holds the k-th prime, it holds every
/// prime of lower index. Queries built on top of this trait live in
/// [PrimeBufferExt][crate::PrimeBufferExt].
pub trait PrimeBuffer<T: PrimeInt> {
    /// Primes found so far, sorted ascending
    fn primes(&self) -> &[T];

    /// Find the prime after the current largest one, append it and return it
    fn append_next(&mut self) -> T;

    /// Test if the number is already in the buffer
    #[inline]
    fn contains(&self, num: T) -> bool {
        self.primes().binary_search(&num).is_ok()
    }

    /// The largest prime found so far
    #[inline]
    fn largest(&self) -> Option<T> {
        self.primes().last().copied()
    }

    #[inline]
    fn len(&self) -> usize {
        self.primes().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.primes().is_empty()
    }
}
