//! Scan over a range of integers for the longest factorization description

use crate::buffer::{PrimeBufferExt, PrimeCache};
use crate::describe::describe;
use crate::traits::{PrimeBuffer, PrimeInt};
use num_traits::One;
use tracing::debug;

/// Upper bound of the scan done by the `factor-scan` binary
pub const DEFAULT_UPPER_BOUND: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig<T = u64> {
    /// inclusive end of the scanned range, which always starts at 2
    pub upper_bound: T,
}

impl<T> ScanConfig<T> {
    pub fn new(upper_bound: T) -> Self {
        Self { upper_bound }
    }
}

impl Default for ScanConfig<u64> {
    fn default() -> Self {
        Self::new(DEFAULT_UPPER_BOUND)
    }
}

/// An integer whose description is longer than those of all smaller scanned integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
    pub value: T,
    pub factors: Vec<T>,
    pub description: String,
}

impl<T> Record<T> {
    /// Length of the description in characters
    #[inline]
    pub fn len(&self) -> usize {
        self.description.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
    }
}

/// Scan of `[2, upper_bound]` in increasing order, yielding a [Record] each time a
/// strictly longer description than every earlier one is found.
///
/// The scan owns a single [PrimeCache] that is shared by every factorization, so no
/// prime is found twice during a scan.
///
/// ```
/// use factor_scan::{LongestScan, ScanConfig};
///
/// let records: Vec<_> = LongestScan::new(ScanConfig::new(12u32)).collect();
/// let found: Vec<_> = records.iter().map(|r| r.description.as_str()).collect();
/// assert_eq!(found, ["2", "2^2", "2 * 3", "2^2 * 3"]);
/// ```
#[derive(Debug, Clone)]
pub struct LongestScan<T> {
    cache: PrimeCache<T>,
    next: Option<T>, // None once the range is exhausted
    upper_bound: T,
    best: Option<Record<T>>,
}

impl<T: PrimeInt> LongestScan<T> {
    pub fn new(config: ScanConfig<T>) -> Self {
        Self::with_cache(config, PrimeCache::new())
    }

    /// Start a scan reusing primes found earlier
    pub fn with_cache(config: ScanConfig<T>, cache: PrimeCache<T>) -> Self {
        let start = T::one() + T::one();
        LongestScan {
            cache,
            next: if start <= config.upper_bound { Some(start) } else { None },
            upper_bound: config.upper_bound,
            best: None,
        }
    }

    /// The longest record found so far
    pub fn best(&self) -> Option<&Record<T>> {
        self.best.as_ref()
    }

    pub fn cache(&self) -> &PrimeCache<T> {
        &self.cache
    }

    pub fn into_cache(self) -> PrimeCache<T> {
        self.cache
    }

    /// Scan the rest of the range and return the final record
    pub fn run(mut self) -> Option<Record<T>> {
        self.by_ref().for_each(drop);
        self.best
    }

    fn advance(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = if current < self.upper_bound {
            Some(current + T::one())
        } else {
            None
        };
        Some(current)
    }
}

impl<T: PrimeInt> Iterator for LongestScan<T> {
    type Item = Record<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.advance() {
            let factors = self.cache.prime_factors(value);
            let description = describe(&factors);
            let longest = self.best.as_ref().map_or(0, Record::len);
            if description.chars().count() > longest {
                let record = Record {
                    value,
                    factors,
                    description,
                };
                debug!(
                    value = %record.value,
                    length = record.len(),
                    primes = self.cache.len(),
                    "new longest description"
                );
                self.best = Some(record.clone());
                return Some(record);
            }
        }
        None
    }
}
