//! Rhythmic dissimilarity measures.
//!
//! Each measure compares two rhythms with the same number of slots and fails
//! with [`Error::InvalidArgument`] otherwise, before doing any work.
//!
//! | Measure | Compares | Result |
//! |---------|----------|--------|
//! | [`hamming`] | events slot by slot | differing slots, `[0, len]` |
//! | [`swap`] | paired onset positions | sum of displacements |
//! | [`chronotonic`] | raw event energy | `\|Σa² - Σb²\|` |
//! | [`euclidian`] | paired inter-onset intervals | `sqrt(Σ(a - b)²)` |
//!
//! # Unequal onset counts
//!
//! [`swap`] and [`euclidian`] pair elements positionally and stop at the
//! shorter list. Trailing onsets (or intervals) of the longer rhythm do not
//! contribute.
//!
//! # References
//!
//! - Toussaint, G. (2006). "A Comparison of Rhythmic Dissimilarity Measures".
//!   Forma 21, 129-149.
//! - Gustafson, K. (1988). "The graphical representation of rhythm" -- the
//!   chronotonic representation of inter-onset intervals.

use log::warn;

use crate::error::{Error, Result};
use crate::rhythm::Rhythm;

#[inline]
fn check_lengths(a: &Rhythm, b: &Rhythm) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            left: a.len(),
            right: b.len(),
        })
    }
}

/// Hamming distance: the number of slots where the events differ.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if the rhythms differ in length.
///
/// ```rust
/// use onsets::{hamming, Rhythm};
///
/// let a = Rhythm::new([1, 0, 1, 0]);
/// let b = Rhythm::new([1, 1, 0, 0]);
/// assert_eq!(hamming(&a, &b).unwrap(), 2);
/// ```
pub fn hamming(a: &Rhythm, b: &Rhythm) -> Result<usize> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Swap distance: the sum of `|a.onsets[k] - b.onsets[k]|` over paired onsets.
///
/// For rhythms with equal onset counts this is the number of adjacent swaps
/// needed to turn one into the other (an earth mover's distance on onsets).
///
/// # Errors
///
/// [`Error::InvalidArgument`] if the rhythms differ in length.
///
/// ```rust
/// use onsets::{swap, Rhythm};
///
/// let a = Rhythm::new([1, 0, 1, 0]);
/// let b = Rhythm::new([1, 1, 0, 0]);
/// assert_eq!(swap(&a, &b).unwrap(), 1);
/// ```
pub fn swap(a: &Rhythm, b: &Rhythm) -> Result<usize> {
    check_lengths(a, b)?;
    let ao = a.onsets();
    let bo = b.onsets();
    if ao.len() != bo.len() {
        warn!(
            "swap: onset counts differ ({} vs {}), pairing the first {}",
            ao.len(),
            bo.len(),
            ao.len().min(bo.len())
        );
    }
    Ok(ao.iter().zip(bo.iter()).map(|(&x, &y)| x.abs_diff(y)).sum())
}

/// Chronotonic distance over raw events: `|Σ a[i]² - Σ b[i]²|`.
///
/// Events count as 0 or 1, so this is the difference in onset counts. Note
/// that the chronotonic distance in the literature compares the areas of the
/// inter-onset interval profiles; this measure does not.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if the rhythms differ in length.
///
/// ```rust
/// use onsets::{chronotonic, Rhythm};
///
/// let a = Rhythm::new([1, 0, 1, 1]);
/// let b = Rhythm::new([1, 1, 0, 0]);
/// assert_eq!(chronotonic(&a, &b).unwrap(), 1);
/// ```
pub fn chronotonic(a: &Rhythm, b: &Rhythm) -> Result<usize> {
    check_lengths(a, b)?;
    let energy = |r: &Rhythm| {
        r.iter()
            .map(|e| usize::from(e) * usize::from(e))
            .sum::<usize>()
    };
    Ok(energy(a).abs_diff(energy(b)))
}

/// Euclidean interval-vector distance: `sqrt(Σ(a_ioi[k] - b_ioi[k])²)`.
///
/// Intervals come from [`Rhythm::inter_onset_intervals`], so a leading rest
/// contributes a negative first interval.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if the rhythms differ in length.
/// - [`Error::InvalidOperation`] if either rhythm has no onsets.
///
/// ```rust
/// use onsets::{euclidian, Rhythm};
///
/// let a = Rhythm::new([1, 0, 1, 0]); // [2, 2]
/// let b = Rhythm::new([1, 1, 0, 0]); // [1, 3]
/// assert!((euclidian(&a, &b).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn euclidian(a: &Rhythm, b: &Rhythm) -> Result<f64> {
    check_lengths(a, b)?;
    let ai = a.inter_onset_intervals()?;
    let bi = b.inter_onset_intervals()?;
    if ai.len() != bi.len() {
        warn!(
            "euclidian: interval counts differ ({} vs {}), pairing the first {}",
            ai.len(),
            bi.len(),
            ai.len().min(bi.len())
        );
    }
    let sum_sq: i64 = ai
        .iter()
        .zip(bi.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum();
    Ok((sum_sq as f64).sqrt())
}
