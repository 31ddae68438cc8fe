//! Common test utilities for integration tests.
//!
//! Re-exports the types most tests need and provides request fixtures.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use savesearch_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use savesearch_client::SaveSearchRequest;
use secrecy::SecretString;

/// Token used by every integration test.
#[allow(dead_code)]
pub fn fake_token() -> SecretString {
    SecretString::new("faketoken".to_string().into())
}

/// The request the modal sends for a name of "save search name".
#[allow(dead_code)]
pub fn sample_request() -> SaveSearchRequest {
    SaveSearchRequest::new("save search name", "index=main error | head 10")
}
