//! Error types surfaced by the book and the update decoders.

use thiserror::Error;

/// Coarse classification of a [`BookError`], for callers that branch on
/// the kind of failure rather than its message.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    RuntimeFailure,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BookError {
    /// The input was rejected before touching any state (symbol mismatch,
    /// malformed depth envelope).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input could not be decoded (malformed ticker envelope).
    #[error("runtime failure: {0}")]
    RuntimeFailure(String),
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::RuntimeFailure(_) => ErrorKind::RuntimeFailure,
        }
    }

    /// The underlying cause text
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::RuntimeFailure(msg) => msg,
        }
    }
}
