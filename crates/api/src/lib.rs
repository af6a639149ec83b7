//! Public API layer for the entropy read path
//!
//! This crate provides the thin surface the hosting system calls:
//! - Wire-parameter parsing (`continue`, `n`, `partition`)
//! - The serialized response envelope (`records`, `num_found`, `more`,
//!   `continuation`)
//! - `handle`: one page request end to end
//!
//! Transport (HTTP/RPC), configuration loading, and endpoint registration
//! are the hosting system's concern; this crate only maps parameters to a
//! cursor call and the cursor's result to an envelope.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handler;
pub mod params;
pub mod response;

pub use handler::handle;
pub use params::{parse_page_request, PARAM_CONTINUE, PARAM_PAGE_SIZE, PARAM_PARTITION};
pub use response::PageResponse;
