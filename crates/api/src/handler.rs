//! Page-request handler: wire parameters in, response envelope out
//!
//! Every handler call desugars to exactly one cursor call; there is no
//! retained handler state and no hidden semantics. Transport, routing, and
//! configuration belong to the hosting system.

use std::collections::HashMap;

use tracing::debug;

use entropy_core::{EntropyIndexView, Result};
use entropy_engine::EntropyCursor;

use crate::params::parse_page_request;
use crate::response::PageResponse;

/// Serve one page request against the given index view
///
/// Parses the wire parameters, runs the cursor over `view`, and wraps the
/// result in the response envelope.
///
/// # Errors
///
/// Propagates parameter errors (nothing read from the index) and decode
/// errors (page abandoned) from parsing and the cursor.
pub fn handle(
    view: &dyn EntropyIndexView,
    params: &HashMap<String, String>,
) -> Result<PageResponse> {
    let req = parse_page_request(params)?;
    debug!(
        partition = %req.partition,
        page_size = req.page_size,
        resuming = req.continuation.is_some(),
        "serving entropy page request"
    );
    let result = EntropyCursor::new(view).advance(&req)?;
    Ok(PageResponse::from(result))
}
