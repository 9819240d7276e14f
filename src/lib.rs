//! Binary rhythm cycles and rhythmic dissimilarity measures.
//!
//! `onsets` models a rhythm as a fixed-length cycle of onsets and rests and
//! provides:
//!
//! - **Structure**: [`Rhythm::onsets`], [`Rhythm::inter_onset_intervals`],
//!   [`Rhythm::ratio`], [`Rhythm::interval_vector`]
//! - **Transforms**: [`Rhythm::rotate`], [`Rhythm::reverse`]
//! - **Distances**: [`hamming`], [`swap`], [`chronotonic`], [`euclidian`]
//! - **Batch**: [`batch::DistanceMatrix`] over any [`RhythmMetric`]
//!
//! # Cyclic coordinates
//!
//! Slot indices wrap: for a rhythm of length `n`, index `i` names slot
//! `i mod n` (Euclidean modulo, so `-1` is the last slot). Queries with no
//! defined answer, such as indexing a zero-length rhythm or asking for the
//! intervals of a rhythm without onsets, return [`Error::InvalidOperation`]
//! instead of panicking.
//!
//! # Example
//!
//! ```rust
//! use onsets::{hamming, swap, Rhythm};
//!
//! let tresillo = Rhythm::new([1, 0, 0, 1, 0, 0, 1, 0]);
//! assert_eq!(tresillo.to_string(), "[x . . x . . x .]");
//! assert_eq!(tresillo.onsets(), vec![0, 3, 6]);
//! assert_eq!(tresillo.inter_onset_intervals().unwrap(), vec![3, 3, 2]);
//!
//! let a = Rhythm::new([1, 0, 1, 0]);
//! let b = Rhythm::new([1, 1, 0, 0]);
//! assert_eq!(hamming(&a, &b).unwrap(), 2);
//! assert_eq!(swap(&a, &b).unwrap(), 1);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Rhythm`] (a plain array of
//!   booleans) and [`Metric`] (its lowercase name).
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; install
//! any logger to see them. Truncated pairings in [`swap`] and [`euclidian`]
//! are reported at `warn`.
//!
//! # References
//!
//! - Toussaint, G. (2006). "A Comparison of Rhythmic Dissimilarity Measures".
//!   Forma 21, 129-149.
//! - Toussaint, G. (2013). "The Geometry of Musical Rhythm". CRC Press.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod distance;
pub mod divisors;
mod error;
mod metric;
mod rhythm;

pub use distance::{chronotonic, euclidian, hamming, swap};
pub use error::{Error, Result};
pub use metric::{Metric, RhythmMetric};
pub use rhythm::{Rhythm, Truthy, ONSET_GLYPH, REST_GLYPH};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tresillo() {
        let r = Rhythm::new([1, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(r.to_string(), "[x . . x . . x .]");
    }

    #[test]
    fn test_onsets_basic() {
        assert_eq!(Rhythm::new([1, 0, 1, 0]).onsets(), vec![0, 2]);
    }

    #[test]
    fn test_ioi_examples() {
        assert_eq!(
            Rhythm::new([1, 0, 1, 0, 0]).inter_onset_intervals().unwrap(),
            vec![2, 3]
        );
        assert_eq!(
            Rhythm::new([0, 1, 0, 1, 0]).inter_onset_intervals().unwrap(),
            vec![-1, 2, 2]
        );
    }

    #[test]
    fn test_distance_examples() {
        let a = Rhythm::new([1, 0, 1, 0]);
        let b = Rhythm::new([1, 1, 0, 0]);
        assert_eq!(hamming(&a, &b).unwrap(), 2);
        assert_eq!(swap(&a, &b).unwrap(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = hamming(&Rhythm::new([1]), &Rhythm::new([1, 0])).unwrap_err();
        assert_eq!(err.to_string(), "rhythms must be the same length (1 vs 2)");

        let err = Rhythm::default().at(0).unwrap_err();
        assert!(err.to_string().starts_with("invalid operation"));
    }
}
