//! Standalone versions of the prime queries that bring their own prime cache.
//!
//! Each function here creates an empty [PrimeCache], grows it to answer one query and
//! drops it, so every call rediscovers all the primes it needs from 2. They are
//! convenient for isolated queries. For repeated queries, keep a [PrimeCache] and use
//! the methods of [PrimeBufferExt] instead, which reuse primes found by earlier calls.

use crate::buffer::{PrimeBufferExt, PrimeCache};
use crate::traits::PrimeInt;

/// This function re-exports [PrimeBufferExt::nth_prime()] with a disposable cache
pub fn nth_prime<T: PrimeInt>(index: usize) -> T {
    PrimeCache::new().nth_prime(index)
}

/// This function re-exports [PrimeBufferExt::index_of_prime()] with a disposable cache.
/// `value` must be a prime.
pub fn index_of_prime<T: PrimeInt>(value: T) -> usize {
    PrimeCache::new().index_of_prime(value)
}

/// This function re-exports [PrimeBufferExt::next_prime_after()] with a disposable cache.
/// `value` must be a prime.
pub fn next_prime_after<T: PrimeInt>(value: T) -> T {
    PrimeCache::new().next_prime_after(value)
}

/// This function re-exports [PrimeBufferExt::is_prime()] with a disposable cache
pub fn is_prime<T: PrimeInt>(candidate: T) -> bool {
    PrimeCache::new().is_prime(candidate)
}

/// This function re-exports [PrimeBufferExt::prime_factors()] with a disposable cache
pub fn prime_factors<T: PrimeInt>(n: T) -> Vec<T> {
    PrimeCache::new().prime_factors(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposable_query_test() {
        assert_eq!(nth_prime::<u32>(0), 2);
        assert_eq!(nth_prime::<u32>(9), 29);
        assert_eq!(index_of_prime(97u32), 24);
        assert_eq!(next_prime_after(89u64), 97);
        assert!(is_prime(97u16));
        assert!(!is_prime(98u16));
        assert!(!is_prime(1u16));
        assert_eq!(prime_factors(360u32), [2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(1u32), [1]);
        assert_eq!(prime_factors(0u32), [0]);
    }

    #[test]
    fn cached_agreement_test() {
        let mut pb = PrimeCache::<u32>::new();
        for n in 0..2000u32 {
            assert_eq!(pb.is_prime(n), is_prime(n), "is_prime({})", n);
            assert_eq!(pb.prime_factors(n), prime_factors(n), "prime_factors({})", n);
        }
    }
}
