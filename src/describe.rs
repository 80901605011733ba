//! Rendering of factor lists in `p^a * q^b` form

use std::fmt::{Display, Write};

/// Group adjacent equal factors into (factor, exponent) pairs, keeping the list order.
///
/// The input is expected to be non-decreasing (as returned by
/// [prime_factors][crate::PrimeBufferExt::prime_factors]), so that equal factors are adjacent.
pub fn factor_powers<T: PartialEq + Copy>(factors: &[T]) -> Vec<(T, usize)> {
    let mut result: Vec<(T, usize)> = Vec::new();
    for &f in factors {
        if let Some((p, exp)) = result.last_mut() {
            if *p == f {
                *exp += 1;
                continue;
            }
        }
        result.push((f, 1));
    }
    result
}

/// Describe a factor list as `p^a * q^b * ...`, omitting exponents equal to 1.
///
/// ```
/// use factor_scan::describe;
///
/// assert_eq!(describe(&[2u32, 2, 2, 3, 3, 5]), "2^3 * 3^2 * 5");
/// assert_eq!(describe(&[7u32]), "7");
/// assert_eq!(describe::<u32>(&[]), "");
/// ```
pub fn describe<T: PartialEq + Copy + Display>(factors: &[T]) -> String {
    let mut desc = String::new();
    for (i, (p, exp)) in factor_powers(factors).into_iter().enumerate() {
        if i > 0 {
            desc.push_str(" * ");
        }
        // writing into a String cannot fail
        let _ = if exp > 1 {
            write!(desc, "{}^{}", p, exp)
        } else {
            write!(desc, "{}", p)
        };
    }
    desc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_powers_test() {
        assert_eq!(factor_powers(&[2u64, 2, 2, 3, 3, 5]), [(2, 3), (3, 2), (5, 1)]);
        assert_eq!(factor_powers(&[1u64]), [(1, 1)]);
        assert!(factor_powers::<u64>(&[]).is_empty());
    }

    #[test]
    fn describe_test() {
        assert_eq!(describe(&[2u64, 2, 2, 3, 3, 5]), "2^3 * 3^2 * 5");
        assert_eq!(describe(&[2u64; 16]), "2^16");
        assert_eq!(describe(&[3u64, 5, 7]), "3 * 5 * 7");
        assert_eq!(describe(&[0u64]), "0");
        assert_eq!(describe(&[1u64]), "1");
        assert_eq!(describe::<u64>(&[]), "");
    }
}
