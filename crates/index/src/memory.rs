//! MemoryTermIndex: in-memory term index backend
//!
//! This module implements the writable side of the term index using:
//! - `BTreeMap<Term, TermEntry>` per field for ordered term storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for a monotonically increasing version watermark
//!
//! # Design Notes
//!
//! - **Occurrence counts, not postings**: liveness only needs "at least one
//!   live occurrence", so each term carries live/deleted counters instead
//!   of a posting list
//! - **Tombstones are retained**: a fully tombstoned term stays in the map
//!   as a dead entry; the read path skips it via the liveness oracle
//! - **Reads go through snapshots**: the cursor never reads the live map,
//!   only immutable `TermIndexSnapshot` views

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use entropy_core::Term;

use crate::snapshot::TermIndexSnapshot;

/// Per-term occurrence bookkeeping
///
/// A term is live while at least one of its occurrences has not been
/// tombstoned.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TermEntry {
    /// Occurrences that are still live
    pub live: u32,
    /// Occurrences that have been tombstoned
    pub deleted: u32,
}

impl TermEntry {
    /// Whether at least one live occurrence remains
    pub fn is_live(&self) -> bool {
        self.live > 0
    }
}

/// In-memory term index with ordered fields and a version watermark
///
/// Thread-safe through `parking_lot::RwLock` and `AtomicU64`. The write
/// surface is the minimum the read path's adapter needs: registering term
/// occurrences and tombstoning them. Index maintenance policy (merge,
/// compaction, real posting lists) is out of scope.
///
/// # Example
///
/// ```
/// use entropy_index::MemoryTermIndex;
/// use entropy_core::ENTROPY_FIELD;
///
/// let index = MemoryTermIndex::new();
/// index.insert(ENTROPY_FIELD, "1 p1 A B K1 h1");
/// let snapshot = index.snapshot();
///
/// // Writes after snapshot creation are not visible to the snapshot
/// index.insert(ENTROPY_FIELD, "1 p1 A B K2 h2");
/// assert_eq!(snapshot.version(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryTermIndex {
    /// field name -> ordered term map
    fields: RwLock<BTreeMap<String, BTreeMap<Term, TermEntry>>>,
    /// Global version counter, bumped on every mutation
    version: AtomicU64,
}

impl MemoryTermIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(BTreeMap::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Register one live occurrence of `term` under `field`
    ///
    /// Inserting the same term again adds another occurrence; the term set
    /// stays deduplicated because terms are map keys. Returns the version
    /// assigned to this write.
    pub fn insert(&self, field: &str, term: impl Into<Term>) -> u64 {
        let term = term.into();
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        let mut fields = self.fields.write();
        fields
            .entry(field.to_string())
            .or_default()
            .entry(term)
            .or_default()
            .live += 1;
        version
    }

    /// Tombstone one live occurrence of `term` under `field`
    ///
    /// Returns false if the term is unknown or already fully dead. The
    /// term entry is retained either way so the read path can observe the
    /// tombstone.
    pub fn tombstone(&self, field: &str, term: &Term) -> bool {
        let mut fields = self.fields.write();
        let Some(entry) = fields.get_mut(field).and_then(|terms| terms.get_mut(term)) else {
            return false;
        };
        if entry.live == 0 {
            return false;
        }
        entry.live -= 1;
        entry.deleted += 1;
        self.version.fetch_add(1, Ordering::SeqCst);
        true
    }

    /// Create an immutable point-in-time view of the index
    ///
    /// Deep-clones the term maps at the current version. One page request
    /// runs entirely against one snapshot; a fresh snapshot picks up
    /// writes made since.
    pub fn snapshot(&self) -> TermIndexSnapshot {
        let fields = self.fields.read();
        let version = self.version.load(Ordering::SeqCst);
        debug!(version, "creating term index snapshot");
        TermIndexSnapshot::new(version, fields.clone())
    }

    /// Current global version (highest version assigned so far)
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Number of distinct terms under `field` (live and dead)
    pub fn term_count(&self, field: &str) -> usize {
        self.fields
            .read()
            .get(field)
            .map(|terms| terms.len())
            .unwrap_or(0)
    }
}
