//! Wire-parameter parsing for page requests
//!
//! The hosting system hands request parameters over as a flat string map.
//! The wire names are fixed by the existing anti-entropy callers:
//! `continue` (token), `n` (page size), `partition`.

use std::collections::HashMap;

use entropy_core::{Error, PageRequest, Result};

/// Wire name of the continuation token parameter
pub const PARAM_CONTINUE: &str = "continue";

/// Wire name of the page size parameter
pub const PARAM_PAGE_SIZE: &str = "n";

/// Wire name of the partition parameter
pub const PARAM_PARTITION: &str = "partition";

/// Parse raw request parameters into a typed page request
///
/// `partition` is required and must be non-empty. `n` defaults to
/// `DEFAULT_PAGE_SIZE` when absent; when present it must parse as a
/// positive integer. `continue` is passed through verbatim.
///
/// # Errors
///
/// Returns `Error::MissingParameter` or `Error::InvalidParameter`; the
/// index is never touched on a parameter failure.
pub fn parse_page_request(params: &HashMap<String, String>) -> Result<PageRequest> {
    let partition = params
        .get(PARAM_PARTITION)
        .filter(|p| !p.is_empty())
        .ok_or(Error::MissingParameter(PARAM_PARTITION))?;

    let mut req = PageRequest::new(partition.clone());

    if let Some(raw) = params.get(PARAM_PAGE_SIZE) {
        let n: usize = raw.parse().map_err(|_| Error::InvalidParameter {
            name: PARAM_PAGE_SIZE,
            reason: format!("expected a positive integer, got '{raw}'"),
        })?;
        if n == 0 {
            return Err(Error::InvalidParameter {
                name: PARAM_PAGE_SIZE,
                reason: "must be greater than zero".to_string(),
            });
        }
        req = req.with_page_size(n);
    }

    if let Some(token) = params.get(PARAM_CONTINUE) {
        req = req.with_continuation(token.clone());
    }

    Ok(req)
}
