//! Entropy read-path engine
//!
//! This crate implements the core of the paginated entropy read path:
//! - EntropyCursor: one page of records per call, stateless between calls
//! - Record decoder: six-field term parse with versioned field encoding
//! - Continuation codec: transport-safe term-key tokens
//!
//! The engine reads through the `entropy-core` traits and never touches a
//! concrete index type; `entropy-index` provides the in-memory backing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod cursor;
pub mod record;

pub use codec::{decode_continuation, encode_continuation};
pub use cursor::EntropyCursor;
pub use record::{decode_term, TermFields};
