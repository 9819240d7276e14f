//! Error type shared by rhythm queries and distance measures.

use thiserror::Error;

/// Errors returned by rhythm queries, parsing and distance measures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Distance operands do not have the same number of slots.
    #[error("rhythms must be the same length ({left} vs {right})")]
    InvalidArgument {
        /// Slot count of the left operand.
        left: usize,
        /// Slot count of the right operand.
        right: usize,
    },

    /// The query has no defined result for this rhythm (zero length or no onsets).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A glyph in rhythm notation was neither an onset nor a rest.
    #[error("unexpected glyph {glyph:?} at position {position}")]
    Parse {
        /// The offending character.
        glyph: char,
        /// Character offset in the raw input, counting whitespace and brackets.
        position: usize,
    },

    /// Metric name not recognised.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
