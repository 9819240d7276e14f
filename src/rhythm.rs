//! Rhythms as binary onset cycles.
//!
//! A [`Rhythm`] is a fixed-length sequence of events, each either an onset
//! (`x`) or a rest (`.`). Positions form a ring: index `i` and `i + len`
//! name the same slot.
//!
//! # Inter-onset intervals
//!
//! Two conventions are provided:
//!
//! | Query | Anchored at | Leading rest | `[. x . x .]` |
//! |-------|-------------|--------------|---------------|
//! | [`Rhythm::inter_onset_intervals`] | index 0 | first interval negated | `[-1, 2, 2]` |
//! | [`Rhythm::cyclic_inter_onset_intervals`] | first onset | not represented | `[2, 3]` |
//!
//! The anchored form changes under rotation; the cyclic form only rotates.
//!
//! # Notation
//!
//! Rhythms display in box notation (TUBS), bracketed and space-separated:
//!
//! ```rust
//! use onsets::Rhythm;
//!
//! let clave = Rhythm::new([1, 0, 0, 1, 0, 0, 1, 0]);
//! assert_eq!(clave.to_string(), "[x . . x . . x .]");
//! assert_eq!("[x . . x . . x .]".parse::<Rhythm>().unwrap(), clave);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::divisors::pooled_max_divisor;
use crate::error::{Error, Result};

/// Glyph for an onset in box notation.
pub const ONSET_GLYPH: char = 'x';

/// Glyph for a rest in box notation.
pub const REST_GLYPH: char = '.';

/// Values that can be read as "onset" or "rest".
///
/// Numbers are truthy when non-zero.
pub trait Truthy {
    /// `true` for an onset.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

/// A musical rhythm: a cycle of onsets and rests.
///
/// The length is fixed at construction. [`rotate`](Self::rotate) and
/// [`reverse`](Self::reverse) permute the events in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Rhythm {
    events: Vec<bool>,
}

impl Rhythm {
    /// Create a rhythm from truthy/falsy values.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// let a = Rhythm::new([1, 0, 1]);
    /// let b = Rhythm::new([true, false, true]);
    /// assert_eq!(a, b);
    /// assert_eq!(Rhythm::new(Vec::<u8>::new()).len(), 0);
    /// ```
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Truthy,
    {
        Self {
            events: values.into_iter().map(|v| v.is_truthy()).collect(),
        }
    }

    /// Number of slots (onsets and rests).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if the rhythm has no slots at all.
    #[inline]
    #[must_use]
    pub fn is_zero_length(&self) -> bool {
        self.events.is_empty()
    }

    /// `true` if the rhythm has no onsets. A zero-length rhythm is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.events.iter().any(|&e| e)
    }

    /// Raw events in slot order.
    #[inline]
    #[must_use]
    pub fn events(&self) -> &[bool] {
        &self.events
    }

    /// Iterate over the events in slot order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.events.iter().copied()
    }

    /// Event at cyclic index `i mod len`. Negative indices count back from the end.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] on a zero-length rhythm.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// let r = Rhythm::new([1, 0, 1, 1]);
    /// assert_eq!(r.at(1).unwrap(), false);
    /// assert_eq!(r.at(5).unwrap(), false);
    /// assert_eq!(r.at(-3).unwrap(), false);
    /// ```
    pub fn at(&self, i: isize) -> Result<bool> {
        if self.events.is_empty() {
            return Err(Error::InvalidOperation("index into a zero-length rhythm"));
        }
        let idx = i.rem_euclid(self.events.len() as isize) as usize;
        Ok(self.events[idx])
    }

    /// Ascending indices of the onsets.
    #[must_use]
    pub fn onsets(&self) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| e.then_some(i))
            .collect()
    }

    /// Number of onsets.
    #[must_use]
    pub fn onset_count(&self) -> usize {
        self.events.iter().filter(|&&e| e).count()
    }

    /// Inter-onset intervals anchored at index 0.
    ///
    /// Gaps are measured from index 0 to each onset in turn, then from the last
    /// onset to the end of the cycle. When slot 0 is a rest the first gap is the
    /// leading silence rather than an onset-to-onset interval, and is negated to
    /// mark it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if the rhythm has no onsets.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// assert_eq!(Rhythm::new([1, 0, 1, 0, 0]).inter_onset_intervals().unwrap(), vec![2, 3]);
    /// assert_eq!(Rhythm::new([0, 1, 0, 1, 0]).inter_onset_intervals().unwrap(), vec![-1, 2, 2]);
    /// ```
    pub fn inter_onset_intervals(&self) -> Result<Vec<i64>> {
        let onsets = self.onsets();
        let last = *onsets.last().ok_or(Error::InvalidOperation(
            "inter-onset intervals of a rhythm without onsets",
        ))?;

        let mut intervals = Vec::with_capacity(onsets.len() + 1);
        let mut prev = 0;
        for &onset in &onsets {
            let gap = onset - prev;
            if gap > 0 {
                intervals.push(gap as i64);
            }
            prev = onset;
        }
        intervals.push((self.events.len() - last) as i64);

        if !self.events[0] {
            intervals[0] = -intervals[0];
        }
        Ok(intervals)
    }

    /// Inter-onset intervals measured round the cycle from the first onset.
    ///
    /// The last interval wraps from the final onset back to the first, so the
    /// intervals always sum to `len` and rotation only rotates the list.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if the rhythm has no onsets.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// let r = Rhythm::new([0, 1, 0, 1, 0]);
    /// assert_eq!(r.cyclic_inter_onset_intervals().unwrap(), vec![2, 3]);
    /// ```
    pub fn cyclic_inter_onset_intervals(&self) -> Result<Vec<usize>> {
        let onsets = self.onsets();
        let (first, last) = match (onsets.first(), onsets.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => {
                return Err(Error::InvalidOperation(
                    "inter-onset intervals of a rhythm without onsets",
                ))
            }
        };

        let mut intervals: Vec<usize> = onsets.windows(2).map(|w| w[1] - w[0]).collect();
        intervals.push(self.events.len() - last + first);
        Ok(intervals)
    }

    /// Inter-onset intervals divided by a common normalization factor.
    ///
    /// The factor is the largest value in the union of the divisor sets of all
    /// interval magnitudes (see [`pooled_max_divisor`]). This is an
    /// approximation of a greatest common divisor: it equals the largest
    /// interval, so ratios of unequal intervals are fractional.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if the rhythm has no onsets.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// let r = Rhythm::new([1, 0, 1, 0, 1, 0, 1, 0]);
    /// assert_eq!(r.ratio().unwrap(), vec![1.0, 1.0, 1.0, 1.0]);
    /// ```
    pub fn ratio(&self) -> Result<Vec<f64>> {
        let intervals = self.inter_onset_intervals()?;
        let factor = pooled_max_divisor(&intervals)
            .ok_or(Error::InvalidOperation("ratio of all-zero intervals"))?;
        debug!(
            "ratio: normalizing {} intervals by {}",
            intervals.len(),
            factor
        );
        Ok(intervals
            .iter()
            .map(|&v| v as f64 / factor as f64)
            .collect())
    }

    /// Interval vector (the rhythm's "spectrum").
    ///
    /// Entry `d - 1` counts the onset pairs whose index distance is `d`.
    /// Distances are absolute, not wrapped. The vector has `len` entries.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// // onsets 0, 2, 4: distances 2, 4, 2
    /// let r = Rhythm::new([1, 0, 1, 0, 1]);
    /// assert_eq!(r.interval_vector(), vec![0, 2, 0, 1, 0]);
    /// ```
    #[must_use]
    pub fn interval_vector(&self) -> Vec<usize> {
        let onsets = self.onsets();
        let mut iv = vec![0; self.events.len()];
        for (k, &a) in onsets.iter().enumerate() {
            for &b in &onsets[k + 1..] {
                iv[b - a - 1] += 1;
            }
        }
        iv
    }

    /// Rotate left by `n mod len` slots, in place.
    ///
    /// Does nothing on a zero-length rhythm or one without onsets.
    ///
    /// ```rust
    /// use onsets::Rhythm;
    ///
    /// let mut r = Rhythm::new([1, 1, 0]);
    /// r.rotate(1);
    /// assert_eq!(r.to_string(), "[x . x]");
    /// ```
    pub fn rotate(&mut self, n: isize) {
        if self.events.is_empty() || self.is_empty() {
            return;
        }
        let k = n.rem_euclid(self.events.len() as isize) as usize;
        self.events.rotate_left(k);
    }

    /// Reverse the order of events, in place.
    pub fn reverse(&mut self) {
        self.events.reverse();
    }
}

impl From<Vec<bool>> for Rhythm {
    fn from(events: Vec<bool>) -> Self {
        Self { events }
    }
}

impl From<&[bool]> for Rhythm {
    fn from(events: &[bool]) -> Self {
        Self {
            events: events.to_vec(),
        }
    }
}

impl FromIterator<bool> for Rhythm {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Rhythm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &e) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let glyph = if e { ONSET_GLYPH } else { REST_GLYPH };
            write!(f, "{glyph}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for Rhythm {
    type Err = Error;

    /// Parse box notation.
    ///
    /// Brackets are optional and whitespace is ignored. `x`, `X` and `1` are
    /// onsets; `.`, `-` and `0` are rests.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim_start();
        let mut offset = s[..s.len() - trimmed.len()].chars().count();
        let trimmed = trimmed.trim_end();

        let body = match trimmed.strip_prefix('[') {
            Some(rest) => {
                offset += 1;
                rest
            }
            None => trimmed,
        };
        let body = body.strip_suffix(']').unwrap_or(body);

        body.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, glyph)| match glyph {
                'x' | 'X' | '1' => Ok(true),
                '.' | '-' | '0' => Ok(false),
                _ => Err(Error::Parse {
                    glyph,
                    position: offset + i,
                }),
            })
            .collect()
    }
}
