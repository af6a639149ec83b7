//! Error types for the entropy read path
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The taxonomy follows the request lifecycle: parameter errors fail a call
//! before any index access, decode errors abort an in-flight page. An absent
//! entropy field is NOT an error (the cursor returns an empty terminal page).

use thiserror::Error;

/// Result type alias for entropy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the entropy read path
#[derive(Debug, Error)]
pub enum Error {
    /// A required request parameter was not supplied (or was empty)
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// A request parameter was supplied but rejected
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Wire name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A continuation token could not be decoded back to a term key
    #[error("Malformed continuation token: {0}")]
    MalformedContinuation(String),

    /// A term in the index could not be decoded into an entropy record
    #[error("Malformed entropy term '{term}': {reason}")]
    MalformedTerm {
        /// The term text (lossy UTF-8 if the bytes were not valid UTF-8)
        term: String,
        /// Why decoding failed
        reason: String,
    },
}

/// Coarse error classification for callers that map errors to transport
/// status codes without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was invalid; nothing was read from the index
    Parameter,
    /// Stored or carried data could not be decoded
    Decode,
}

impl Error {
    /// Classify this error as a parameter or decode failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingParameter(_) | Error::InvalidParameter { .. } => ErrorKind::Parameter,
            Error::MalformedContinuation(_) | Error::MalformedTerm { .. } => ErrorKind::Decode,
        }
    }
}
