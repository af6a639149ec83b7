//! EntropyCursor: one page of entropy records per call
//!
//! This module implements the paginated read path. Each `advance` call is
//! a single synchronous pass over the term stream of one index snapshot:
//! position (optionally from a continuation token), then scan forward
//! skipping dead and non-matching terms until the page fills or the stream
//! ends.
//!
//! # Statelessness
//!
//! The cursor holds no state between calls. The continuation token encodes
//! the last MATCHED term, not the last term scanned, so a resumed call
//! re-scans and discards any dead or non-matching terms between the last
//! match and wherever the previous call actually stopped. That re-scan is
//! intentional: it is what keeps the only carried state down to the token
//! itself, and it must not be optimized away.

use tracing::{debug, trace};

use entropy_core::{
    EntropyIndexView, Error, PageRequest, PageResult, Result, SeekOutcome, Term, TermCursor,
    ENTROPY_FIELD,
};

use crate::codec;
use crate::record::TermFields;

/// Paginated cursor over the entropy records of one index view
///
/// The view is a consistent point-in-time snapshot supplied by the caller;
/// the cursor neither opens nor closes it. Concurrent callers construct
/// independent cursors over their own snapshots.
///
/// # Example
///
/// ```
/// use entropy_core::PageRequest;
/// use entropy_engine::EntropyCursor;
/// use entropy_index::MemoryTermIndex;
/// use entropy_core::ENTROPY_FIELD;
///
/// let index = MemoryTermIndex::new();
/// index.insert(ENTROPY_FIELD, "1 p1 A B K1 h1");
/// let snapshot = index.snapshot();
///
/// let cursor = EntropyCursor::new(&snapshot);
/// let page = cursor.advance(&PageRequest::new("p1")).unwrap();
/// assert_eq!(page.records.len(), 1);
/// assert!(!page.more);
/// ```
pub struct EntropyCursor<'a> {
    view: &'a dyn EntropyIndexView,
    field: String,
}

impl<'a> EntropyCursor<'a> {
    /// Create a cursor reading the well-known entropy field of `view`
    pub fn new(view: &'a dyn EntropyIndexView) -> Self {
        Self {
            view,
            field: ENTROPY_FIELD.to_string(),
        }
    }

    /// Builder: read a different index field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Produce one page of entropy records for `req`
    ///
    /// Returns at most `req.page_size` records in ascending term order,
    /// all live and all belonging to `req.partition`. When the result has
    /// `more == true` the page is exactly full and `continuation` carries
    /// the token to resume from; the record it was minted from is never
    /// re-emitted.
    ///
    /// # Errors
    ///
    /// - `Error::MissingParameter` / `Error::InvalidParameter` for an
    ///   empty partition or zero page size, before any index access
    /// - `Error::MalformedContinuation` if the token does not decode
    /// - `Error::MalformedTerm` if a live term cannot be split or decoded;
    ///   the page is abandoned rather than silently truncated
    pub fn advance(&self, req: &PageRequest) -> Result<PageResult> {
        if req.partition.is_empty() {
            return Err(Error::MissingParameter("partition"));
        }
        if req.page_size == 0 {
            return Err(Error::InvalidParameter {
                name: "page_size",
                reason: "must be greater than zero".to_string(),
            });
        }

        // Field absent from the index: no entropy data at all.
        let Some(mut terms) = self.view.terms(&self.field) else {
            return Ok(PageResult::empty());
        };

        let mut current = match &req.continuation {
            Some(token) => {
                let key = codec::decode_continuation(token)?;
                debug!(key = %String::from_utf8_lossy(&key), "resuming from continuation");
                match terms.seek_at_or_after(&key)? {
                    SeekOutcome::End => return Ok(PageResult::empty()),
                    SeekOutcome::Found => {
                        // The key is the term the previous page ended on;
                        // step past it so that record is never repeated.
                        match terms.next()? {
                            Some(term) => Some(term),
                            None => return Ok(PageResult::empty()),
                        }
                    }
                    SeekOutcome::NotFound => terms.next()?,
                }
            }
            None => terms.next()?,
        };

        let mut records = Vec::new();
        let mut last_matched: Option<Term> = None;
        let mut count = 0usize;

        while let Some(term) = current {
            if count == req.page_size {
                break;
            }
            // Dead terms are skipped without decoding.
            if self.view.is_live(&self.field, &term)? {
                let fields = TermFields::parse(term.text()?)?;
                trace!(term = %term, partition = fields.partition, "scanning live term");
                if fields.partition == req.partition {
                    records.push(fields.decode()?);
                    last_matched = Some(term);
                    count += 1;
                }
            }
            current = terms.next()?;
        }

        match last_matched {
            Some(last) if count == req.page_size => Ok(PageResult {
                records,
                more: true,
                continuation: Some(codec::encode_continuation(last.as_bytes())),
            }),
            _ => Ok(PageResult {
                records,
                more: false,
                continuation: None,
            }),
        }
    }
}
