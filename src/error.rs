//! Errors surfaced by the formatting pipeline
//!
//! Both variants are programming-invariant violations rather than expected
//! runtime conditions: they mean the scanner vocabulary and the classification
//! table have drifted apart, or the input comment is truncated. They abort
//! formatting of the current comment; partially rendered text is discarded and
//! nothing is retried.

use std::fmt;

/// Errors that can occur while formatting a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The normalizer saw a raw token type outside its classification table.
    UnclassifiedToken(String),
    /// The token sequence ended without a comment-end token.
    MissingTerminator,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnclassifiedToken(kind) => {
                write!(f, "Unclassified scanner token: {}", kind)
            }
            FormatError::MissingTerminator => {
                write!(f, "Token sequence ended without a comment-end token")
            }
        }
    }
}

impl std::error::Error for FormatError {}
