//! entropydb - Paginated entropy-record read path for anti-entropy tree exchange
//!
//! entropydb exposes a paginated read path over a sorted stream of encoded
//! entropy records stored inside a larger search index. An external
//! anti-entropy process uses it to enumerate, in stable sorted order and in
//! bounded-size pages, all live records belonging to one data partition,
//! feeding a Merkle-style comparison tree per partition.
//!
//! # Quick Start
//!
//! ```
//! use entropydb::{EntropyCursor, MemoryTermIndex, PageRequest, ENTROPY_FIELD};
//!
//! // Populate an index and take a point-in-time snapshot
//! let index = MemoryTermIndex::new();
//! index.insert(ENTROPY_FIELD, "1 p1 A B K1 h1");
//! index.insert(ENTROPY_FIELD, "1 p1 A B K2 h2");
//! let snapshot = index.snapshot();
//!
//! // Walk the partition one page at a time
//! let cursor = EntropyCursor::new(&snapshot);
//! let page = cursor.advance(&PageRequest::new("p1").with_page_size(1)).unwrap();
//! assert_eq!(page.records[0].key, "K1");
//! assert!(page.more);
//! ```
//!
//! # Architecture
//!
//! The cursor ([`EntropyCursor`]) is stateless between calls: the only
//! carried state is the opaque continuation token inside the page result.
//! It reads through the [`EntropyIndexView`] trait, so any ordered term
//! index with at-or-after seeking can back it; [`MemoryTermIndex`] is the
//! in-memory implementation.

// Re-export the public API from the member crates
pub use entropy_api::{handle, parse_page_request, PageResponse};
pub use entropy_core::{
    EntropyIndexView, EntropyRecord, Error, ErrorKind, PageRequest, PageResult, Result,
    SeekOutcome, Term, TermCursor, DEFAULT_PAGE_SIZE, ENTROPY_FIELD,
};
pub use entropy_engine::{decode_continuation, decode_term, encode_continuation, EntropyCursor};
pub use entropy_index::{MemoryTermIndex, TermIndexSnapshot};
