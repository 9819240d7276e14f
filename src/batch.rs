//! Pairwise distance matrices over collections of rhythms.
//!
//! Comparing a corpus of rhythms (the six 4/4 claves, say) under one measure
//! yields a symmetric matrix, the usual input to phylogenetic trees and
//! clustering of rhythmic families.
//!
//! # Layout
//!
//! Row-major, `n * n` entries:
//!
//! ```text
//! data[i * n + j] = distance(rhythm i, rhythm j)
//! ```
//!
//! For symmetric measures only the upper triangle (including the diagonal)
//! is evaluated and the lower triangle is mirrored from it. Measures whose
//! [`RhythmMetric::is_symmetric`] is `false` get every ordered pair
//! evaluated. All built-in measures are symmetric.
//!
//! # Example
//!
//! ```rust
//! use onsets::batch::DistanceMatrix;
//! use onsets::{Metric, Rhythm};
//!
//! let rhythms = vec![
//!     Rhythm::new([1, 0, 1, 0]),
//!     Rhythm::new([1, 1, 0, 0]),
//!     Rhythm::new([1, 0, 0, 1]),
//! ];
//! let m = DistanceMatrix::compute(&rhythms, &Metric::Hamming).unwrap();
//!
//! assert_eq!(m.get(0, 1), 2.0);
//! assert_eq!(m.get(1, 0), 2.0);
//! assert_eq!(m.get(2, 2), 0.0);
//! ```

use log::debug;

use crate::error::Result;
use crate::metric::RhythmMetric;
use crate::rhythm::Rhythm;

/// Matrix of pairwise distances, symmetric when the measure is.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    /// Row-major: data[i * n + j]
    data: Vec<f64>,
    /// Number of rhythms
    n: usize,
}

impl DistanceMatrix {
    /// Evaluate `metric` over every pair of `rhythms`.
    ///
    /// # Errors
    ///
    /// The first error returned by `metric` (for example, rhythms of
    /// different lengths) aborts the computation.
    pub fn compute<M>(rhythms: &[Rhythm], metric: &M) -> Result<Self>
    where
        M: RhythmMetric + ?Sized,
    {
        let n = rhythms.len();
        let symmetric = metric.is_symmetric();
        debug!(
            "distance matrix: {} rhythms, {} pairs, metric {}",
            n,
            if symmetric { n * (n + 1) / 2 } else { n * n },
            metric.name()
        );

        let mut data = vec![0.0f64; n * n];
        for i in 0..n {
            if symmetric {
                for j in i..n {
                    let d = metric.distance(&rhythms[i], &rhythms[j])?;
                    data[i * n + j] = d;
                    data[j * n + i] = d;
                }
            } else {
                for j in 0..n {
                    data[i * n + j] = metric.distance(&rhythms[i], &rhythms[j])?;
                }
            }
        }
        Ok(Self { data, n })
    }

    /// Number of rhythms (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// `true` if computed over no rhythms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between rhythm `i` and rhythm `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.n && j < self.n,
            "index ({i}, {j}) out of range for {} rhythms",
            self.n
        );
        self.data[i * self.n + j]
    }

    /// Distances from rhythm `i` to every rhythm.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.n, "row {i} out of range for {} rhythms", self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Closest other rhythm to rhythm `i`: `(index, distance)`.
    ///
    /// Ties go to the lowest index. `None` when there is no other rhythm.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn nearest(&self, i: usize) -> Option<(usize, f64)> {
        self.row(i)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(None, |best, (j, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((j, d)),
            })
    }

    /// Mean of the off-diagonal distances from rhythm `i`.
    ///
    /// A rhythm with a low mean sits near the "center" of the collection.
    /// `None` when there is no other rhythm.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range and there are at least two rhythms.
    pub fn mean_distance(&self, i: usize) -> Option<f64> {
        if self.n < 2 {
            return None;
        }
        let sum: f64 = self.row(i).iter().sum::<f64>() - self.get(i, i);
        Some(sum / (self.n - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Metric;

    fn claves() -> Vec<Rhythm> {
        vec![
            // son
            Rhythm::new([1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0]),
            // rumba
            Rhythm::new([1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0]),
            // bossa-nova
            Rhythm::new([1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0]),
        ]
    }

    #[test]
    fn test_symmetric_with_zero_diagonal() {
        let rhythms = claves();
        for metric in Metric::ALL {
            let m = DistanceMatrix::compute(&rhythms, &metric).unwrap();
            assert_eq!(m.len(), 3);
            for i in 0..3 {
                assert_eq!(m.get(i, i), 0.0, "{metric} diagonal");
                for j in 0..3 {
                    assert_eq!(m.get(i, j), m.get(j, i), "{metric} symmetry");
                }
            }
        }
    }

    #[test]
    fn test_swap_matrix_values() {
        let m = DistanceMatrix::compute(&claves(), &Metric::Swap).unwrap();
        // son-rumba: third stroke moves 6 -> 7
        assert_eq!(m.get(0, 1), 1.0);
        // son-bossa: last stroke moves 12 -> 13
        assert_eq!(m.get(0, 2), 1.0);
        // rumba-bossa: both moves
        assert_eq!(m.get(1, 2), 2.0);
    }

    #[test]
    fn test_nearest() {
        let m = DistanceMatrix::compute(&claves(), &Metric::Swap).unwrap();
        // son is 1 away from both; tie goes to the lower index
        assert_eq!(m.nearest(0), Some((1, 1.0)));
        assert_eq!(m.nearest(2), Some((0, 1.0)));
    }

    #[test]
    fn test_mean_distance() {
        let m = DistanceMatrix::compute(&claves(), &Metric::Swap).unwrap();
        assert_eq!(m.mean_distance(0), Some(1.0));
        assert_eq!(m.mean_distance(1), Some(1.5));
    }

    #[test]
    fn test_empty_and_single() {
        let m = DistanceMatrix::compute(&[], &Metric::Hamming).unwrap();
        assert!(m.is_empty());

        let m = DistanceMatrix::compute(&[Rhythm::new([1, 0])], &Metric::Hamming).unwrap();
        assert_eq!(m.nearest(0), None);
        assert_eq!(m.mean_distance(0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mean_distance_out_of_range() {
        let m = DistanceMatrix::compute(&claves(), &Metric::Swap).unwrap();
        let _ = m.mean_distance(3);
    }

    #[test]
    fn test_error_aborts() {
        let rhythms = vec![Rhythm::new([1, 0]), Rhythm::new([1, 0, 0])];
        assert!(DistanceMatrix::compute(&rhythms, &Metric::Hamming).is_err());
    }
}
