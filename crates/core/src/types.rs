//! Core types for the entropy read path
//!
//! This module defines the foundational types:
//! - Term: opaque ordered byte-string key, one per entropy record
//! - EntropyRecord: the decoded projection of a term
//! - ENTROPY_FIELD: the reserved index field entropy terms live under

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The reserved index field that entropy terms are stored under.
///
/// Every entropy term lives in this single well-known field; an index with
/// no entries under it has no entropy data at all.
pub const ENTROPY_FIELD: &str = "_entropy";

/// An opaque, totally ordered byte-string key in the index.
///
/// Terms sort in ascending lexicographic byte order, which is the order the
/// index enumerates them in and the order pages are emitted in. A term's
/// UTF-8 text encodes one entropy record as six space-separated fields
/// (see `entropy-engine`'s record decoder).
///
/// Continuation tokens carry the exact bytes of a term, so `Term` preserves
/// the raw byte sequence rather than normalizing to a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term(Vec<u8>);

impl Term {
    /// Create a term from raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw byte sequence of this term
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the term, returning its raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The UTF-8 text of this term
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedTerm` if the bytes are not valid UTF-8.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.0).map_err(|e| Error::MalformedTerm {
            term: String::from_utf8_lossy(&self.0).into_owned(),
            reason: format!("term is not valid UTF-8: {e}"),
        })
    }

    /// Number of bytes in this term
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this term is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

// Allows BTreeMap<Term, _> lookups and range scans keyed by raw byte slices.
// Sound because Vec<u8> and [u8] order identically.
impl Borrow<[u8]> for Term {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// The decoded projection of one entropy term.
///
/// Produced only for terms whose partition field equals the requested
/// partition and which are currently live. The external anti-entropy
/// process feeds these into a Merkle-style hash tree per partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntropyRecord {
    /// Encoding version of the source term
    pub vsn: i32,
    /// Bucket type the record belongs to
    pub bucket_type: String,
    /// Bucket name the record belongs to
    pub bucket_name: String,
    /// The record's key within its bucket
    pub key: String,
    /// Object hash, base64-encoded by the producer and forwarded unmodified
    pub hash: String,
}
