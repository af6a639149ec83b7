//! Core types and traits for the entropy read path
//!
//! This crate defines the foundational types used throughout the system:
//! - Term: opaque ordered byte-string key, one per entropy record
//! - EntropyRecord: the decoded projection of a term
//! - PageRequest / PageResult: one-page pagination contract
//! - Error: error type hierarchy (parameter vs. decode failures)
//! - Traits: term-index abstraction (EntropyIndexView, TermCursor)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod page;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, ErrorKind, Result};
pub use page::{PageRequest, PageResult, DEFAULT_PAGE_SIZE};
pub use traits::{EntropyIndexView, SeekOutcome, TermCursor};
pub use types::{EntropyRecord, Term, ENTROPY_FIELD};
