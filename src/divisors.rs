//! Divisor sets and the pooled normalization factor used by [`Rhythm::ratio`].
//!
//! [`Rhythm::ratio`]: crate::Rhythm::ratio

/// All positive divisors of `n`, ascending.
///
/// Trial division up to `sqrt(n)`, adding each divisor and its co-divisor.
/// `divisors(0)` is empty.
///
/// ```
/// use onsets::divisors::divisors;
///
/// assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(divisors(1), vec![1]);
/// ```
#[must_use]
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// Largest value in the union of the divisor sets of `values` (sign ignored).
///
/// This is not a greatest common divisor: for `[2, 3]` the pool is
/// `{1, 2, 3}` and the factor is 3, although 3 does not divide 2. The factor
/// is therefore the largest interval magnitude whenever the list is non-empty.
///
/// Returns `None` when every value is zero (or the slice is empty).
#[must_use]
pub fn pooled_max_divisor(values: &[i64]) -> Option<u64> {
    values
        .iter()
        .flat_map(|v| divisors(v.unsigned_abs()))
        .max()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn proptest_every_divisor_divides(n in 1u64..5000) {
            for d in divisors(n) {
                prop_assert_eq!(n % d, 0);
            }
        }

        #[test]
        fn proptest_divisors_sorted_and_bounded(n in 1u64..5000) {
            let ds = divisors(n);
            prop_assert!(ds.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(ds.first().copied(), Some(1));
            prop_assert_eq!(ds.last().copied(), Some(n));
        }

        #[test]
        fn proptest_divisor_count_matches_brute_force(n in 1u64..2000) {
            let brute = (1..=n).filter(|d| n % d == 0).count();
            prop_assert_eq!(divisors(n).len(), brute);
        }
    }
}
