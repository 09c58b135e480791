//! Error types for query parsing.

use thiserror::Error;

/// Errors surfaced when parsing in strict mode.
///
/// Lenient parsing never produces these; it drops what it cannot
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The query was empty or contained only whitespace.
    #[error("query is empty")]
    EmptyQuery,

    /// A segment matched no clause pattern.
    #[error("unmatched query segment: {segment:?}")]
    UnmatchedSegment {
        /// The offending segment, whitespace-normalized.
        segment: String,
    },
}
