//! Serialized response envelope for one page of entropy records

use serde::{Deserialize, Serialize};

use entropy_core::{EntropyRecord, PageResult};

/// The wire response for one page request
///
/// `num_found` always equals `records.len()`; it is carried explicitly
/// because existing anti-entropy callers read it from the envelope.
/// `continuation` is serialized only when present (iff `more` is true).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Records matching the requested partition, in ascending term order
    pub records: Vec<EntropyRecord>,

    /// Number of records in this page
    pub num_found: usize,

    /// Whether further pages may exist
    pub more: bool,

    /// Token to resume from, present iff `more` is true
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub continuation: Option<String>,
}

impl From<PageResult> for PageResponse {
    fn from(result: PageResult) -> Self {
        PageResponse {
            num_found: result.records.len(),
            records: result.records,
            more: result.more,
            continuation: result.continuation,
        }
    }
}
