//! Incremental prime cache, trial division factorization over it, and a scan for the
//! integer with the longest `p^a * q^b` description in a range.

mod buffer;
mod describe;
mod scan;
mod traits;

pub mod nt_funcs;

pub use buffer::{PrimeBufferExt, PrimeCache};
pub use describe::{describe, factor_powers};
pub use scan::{LongestScan, Record, ScanConfig, DEFAULT_UPPER_BOUND};
pub use traits::{PrimeBuffer, PrimeInt};
