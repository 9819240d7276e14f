//! Metric trait surface over rhythms.
//!
//! [`RhythmMetric`] lets batch code take any dissimilarity measure;
//! [`Metric`] names the built-in ones so a measure can be picked at runtime
//! (from a config string, say).

use std::fmt;
use std::str::FromStr;

use crate::distance::{chronotonic, euclidian, hamming, swap};
use crate::error::{Error, Result};
use crate::rhythm::Rhythm;

/// A dissimilarity measure between two rhythms of equal length.
///
/// Implementations decide their own preconditions and report them through
/// [`Error`].
///
/// # Symmetry
///
/// Measures are assumed symmetric: `distance(a, b) == distance(b, a)`.
/// [`DistanceMatrix`](crate::batch::DistanceMatrix) relies on this to
/// evaluate only half the pairs. A directed measure must override
/// [`is_symmetric`](Self::is_symmetric) to return `false`, and then every
/// ordered pair is evaluated.
pub trait RhythmMetric {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &Rhythm, b: &Rhythm) -> Result<f64>;

    /// Short lowercase name, used in logs.
    fn name(&self) -> &'static str;

    /// `true` if `distance(a, b) == distance(b, a)` for all inputs.
    fn is_symmetric(&self) -> bool {
        true
    }
}

/// Built-in rhythmic dissimilarity measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// [`hamming`]
    Hamming,
    /// [`swap`]
    Swap,
    /// [`chronotonic`]
    Chronotonic,
    /// [`euclidian`]
    Euclidian,
}

impl Metric {
    /// Every built-in measure.
    pub const ALL: [Metric; 4] = [
        Metric::Hamming,
        Metric::Swap,
        Metric::Chronotonic,
        Metric::Euclidian,
    ];
}

impl RhythmMetric for Metric {
    fn distance(&self, a: &Rhythm, b: &Rhythm) -> Result<f64> {
        match self {
            Metric::Hamming => hamming(a, b).map(|d| d as f64),
            Metric::Swap => swap(a, b).map(|d| d as f64),
            Metric::Chronotonic => chronotonic(a, b).map(|d| d as f64),
            Metric::Euclidian => euclidian(a, b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Metric::Hamming => "hamming",
            Metric::Swap => "swap",
            Metric::Chronotonic => "chronotonic",
            Metric::Euclidian => "euclidian",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Case-insensitive; `euclidean` is accepted as a spelling of `euclidian`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamming" => Ok(Metric::Hamming),
            "swap" => Ok(Metric::Swap),
            "chronotonic" => Ok(Metric::Chronotonic),
            "euclidian" | "euclidean" => Ok(Metric::Euclidian),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}
