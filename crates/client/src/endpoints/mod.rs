//! REST API endpoint implementations.

mod request;
mod saved;

pub use request::send_request_with_retry;
pub use saved::create_saved_search;
