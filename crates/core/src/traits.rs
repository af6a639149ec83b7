//! Core traits for term-index abstraction
//!
//! This module defines the narrow interface the entropy cursor consumes:
//! an ordered term stream with at-or-after seeking (`TermCursor`) and a
//! point-in-time index view exposing that stream plus a liveness oracle
//! (`EntropyIndexView`). The abstraction lets the cursor run against the
//! real in-memory index (`entropy-index`) or any other backing index
//! without changes.

use crate::error::Result;
use crate::types::Term;

/// Outcome of positioning a term cursor at or after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// The key is itself a term in the index
    Found,
    /// The key is not a term, but terms greater than it exist
    NotFound,
    /// The key is greater than every term in the index
    End,
}

/// An ordered cursor over the terms of one index field
///
/// Terms are enumerated in ascending lexicographic byte order. The cursor
/// is stateful and single-threaded; callers that need concurrent scans
/// open one cursor each.
///
/// # Positioning contract
///
/// After `seek_at_or_after(key)`:
/// - `Found`: the next `next()` call yields the first term strictly
///   GREATER than `key`. The exact match is skipped: it was already
///   emitted by the page that minted the continuation key.
/// - `NotFound`: the next `next()` call yields the first term greater
///   than `key`, i.e. the ceiling the seek landed on.
/// - `End`: the cursor is exhausted; `next()` yields `None`.
pub trait TermCursor {
    /// Position this cursor at or after the given raw key
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying index read fails.
    fn seek_at_or_after(&mut self, key: &[u8]) -> Result<SeekOutcome>;

    /// Advance to and return the next term, or `None` at end of stream
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying index read fails.
    fn next(&mut self) -> Result<Option<Term>>;
}

/// A consistent point-in-time view of a term index
///
/// One page request runs entirely against one view; the cursor neither
/// opens nor closes views. Implementations must be safe to share across
/// threads (`Send + Sync`) so concurrent page requests can run against
/// independent or shared snapshots without interference.
pub trait EntropyIndexView: Send + Sync {
    /// Open a cursor over the terms of `field`
    ///
    /// Returns `None` when the field is absent from the index entirely,
    /// a legitimate terminal "no entropy data" condition, not an error.
    fn terms(&self, field: &str) -> Option<Box<dyn TermCursor + '_>>;

    /// Whether at least one occurrence of `term` is currently live
    ///
    /// A term whose every occurrence is tombstoned is dead and must be
    /// skipped by the cursor without decoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying index read fails.
    fn is_live(&self, field: &str, term: &Term) -> Result<bool>;

    /// The version watermark this view was taken at
    fn version(&self) -> u64;
}
