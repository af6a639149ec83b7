//! Page request/result types for the entropy read path
//!
//! This module defines the request and result types for one page of
//! entropy records:
//! - PageRequest: partition, page size, and optional continuation token
//! - PageResult: ordered records plus the "more data" signal
//!
//! The continuation token is entirely opaque to the caller: it must be
//! persisted and replayed verbatim. It is the ONLY state carried between
//! calls; the cursor itself is stateless.

use serde::{Deserialize, Serialize};

use crate::types::EntropyRecord;

/// Default number of records per page when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Request for one page of entropy records
///
/// # Examples
///
/// ```
/// use entropy_core::PageRequest;
///
/// let req = PageRequest::new("p1").with_page_size(100);
/// assert_eq!(req.partition, "p1");
/// assert_eq!(req.page_size, 100);
/// assert!(req.continuation.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Partition to enumerate records for (required, must be non-empty)
    pub partition: String,

    /// Maximum records to return in this page
    pub page_size: usize,

    /// Opaque token from a prior page's result, absent on the first call
    pub continuation: Option<String>,
}

impl PageRequest {
    /// Create a request for the first page of a partition
    ///
    /// Default values:
    /// - page_size: `DEFAULT_PAGE_SIZE` (1000)
    /// - continuation: None (start at the first term)
    pub fn new(partition: impl Into<String>) -> Self {
        PageRequest {
            partition: partition.into(),
            page_size: DEFAULT_PAGE_SIZE,
            continuation: None,
        }
    }

    /// Builder: set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builder: resume from a continuation token
    pub fn with_continuation(mut self, token: impl Into<String>) -> Self {
        self.continuation = Some(token.into());
        self
    }
}

/// One page of entropy records
///
/// Invariants:
/// - `records` is in ascending term order and contains at most `page_size`
///   entries
/// - `records.len() == page_size` exactly when `more` is true
/// - `continuation` is present if and only if `more` is true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Records matching the requested partition, in ascending term order
    pub records: Vec<EntropyRecord>,

    /// Whether further pages may exist
    pub more: bool,

    /// Token to resume from, present iff `more` is true
    pub continuation: Option<String>,
}

impl PageResult {
    /// The terminal "no more data" page
    pub fn empty() -> Self {
        PageResult {
            records: Vec::new(),
            more: false,
            continuation: None,
        }
    }

    /// Number of records in this page
    pub fn num_found(&self) -> usize {
        self.records.len()
    }
}
