//! TermIndexSnapshot: immutable point-in-time view via deep clone
//!
//! This module provides the read side of the term index. A snapshot is a
//! deep clone of the field/term maps taken under the read lock, wrapped in
//! an `Arc` so it is cheap to share across threads.
//!
//! # Design Notes
//!
//! - **Deep clone**: expensive but correct; the `EntropyIndexView` trait
//!   abstraction allows replacing this with a lazy, version-filtered view
//!   later without touching the cursor
//! - **Immutable**: once created, the snapshot never changes; an in-flight
//!   pagination walk is isolated from concurrent writes
//! - **Cursor over `BTreeMap::range`**: seek and next are O(log n) range
//!   probes, keyed by raw bytes

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use entropy_core::{EntropyIndexView, Result, SeekOutcome, Term, TermCursor};

use crate::memory::TermEntry;

/// An immutable point-in-time view of the term index
///
/// Implements `EntropyIndexView`; one page request runs entirely against
/// one snapshot. Cloning is cheap (the data is `Arc`-shared).
#[derive(Debug, Clone)]
pub struct TermIndexSnapshot {
    /// The version at which this snapshot was created
    version: u64,
    /// Deep clone of the field/term maps at snapshot time
    fields: Arc<BTreeMap<String, BTreeMap<Term, TermEntry>>>,
}

impl TermIndexSnapshot {
    /// Create a snapshot from cloned field data
    ///
    /// This is typically called by `MemoryTermIndex::snapshot()`, not
    /// directly.
    pub(crate) fn new(version: u64, fields: BTreeMap<String, BTreeMap<Term, TermEntry>>) -> Self {
        Self {
            version,
            fields: Arc::new(fields),
        }
    }
}

impl EntropyIndexView for TermIndexSnapshot {
    fn terms(&self, field: &str) -> Option<Box<dyn TermCursor + '_>> {
        let terms = self.fields.get(field)?;
        if terms.is_empty() {
            return None;
        }
        Some(Box::new(SnapshotTermCursor {
            terms,
            position: Position::Start,
        }))
    }

    fn is_live(&self, field: &str, term: &Term) -> Result<bool> {
        Ok(self
            .fields
            .get(field)
            .and_then(|terms| terms.get(term))
            .map(|entry| entry.is_live())
            .unwrap_or(false))
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Cursor position between `next()` calls
#[derive(Debug)]
enum Position {
    /// Before the first term
    Start,
    /// The next term is the first one strictly greater than this key
    After(Term),
    /// Past the last term
    Done,
}

/// Ordered term cursor over one field of a snapshot
///
/// Implements the `TermCursor` positioning contract: after a `Found` seek
/// the exact match is skipped, after a `NotFound` seek the ceiling term is
/// yielded next. Both cases reduce to "next term strictly greater than the
/// seek key", which one `Bound::Excluded` range probe provides.
struct SnapshotTermCursor<'a> {
    terms: &'a BTreeMap<Term, TermEntry>,
    position: Position,
}

impl TermCursor for SnapshotTermCursor<'_> {
    fn seek_at_or_after(&mut self, key: &[u8]) -> Result<SeekOutcome> {
        let ceiling = self
            .terms
            .range::<[u8], _>((Bound::Included(key), Bound::Unbounded))
            .next()
            .map(|(term, _)| term);
        match ceiling {
            None => {
                self.position = Position::Done;
                Ok(SeekOutcome::End)
            }
            Some(term) if term.as_bytes() == key => {
                self.position = Position::After(term.clone());
                Ok(SeekOutcome::Found)
            }
            Some(_) => {
                self.position = Position::After(Term::from_bytes(key));
                Ok(SeekOutcome::NotFound)
            }
        }
    }

    fn next(&mut self) -> Result<Option<Term>> {
        let next = match &self.position {
            Position::Start => self.terms.keys().next().cloned(),
            Position::After(key) => self
                .terms
                .range::<[u8], _>((Bound::Excluded(key.as_bytes()), Bound::Unbounded))
                .next()
                .map(|(term, _)| term.clone()),
            Position::Done => None,
        };
        match next {
            Some(term) => {
                self.position = Position::After(term.clone());
                Ok(Some(term))
            }
            None => {
                self.position = Position::Done;
                Ok(None)
            }
        }
    }
}
