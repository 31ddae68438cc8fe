//! HTTP client for the saved-search REST API.
//!
//! Responsibilities:
//! - Hold the configured `reqwest::Client`, base URL and retry budget.
//! - Implement [`SaveSearchOperation`] on top of the endpoint functions.
//!
//! Does NOT handle:
//! - Deciding whether a user is signed in (see [`crate::auth::SessionProvider`]).
//! - Request retries (see [`crate::endpoints::send_request_with_retry`]).

pub mod builder;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::endpoints;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{SaveSearchRequest, SavedSearchCreated};
use crate::operation::SaveSearchOperation;

pub use builder::SavedSearchClientBuilder;

/// Client for creating saved searches.
#[derive(Debug, Clone)]
pub struct SavedSearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl SavedSearchClient {
    /// Create a new client builder.
    pub fn builder() -> SavedSearchClientBuilder {
        SavedSearchClientBuilder::new()
    }

    /// Base URL requests are sent to, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Create a saved search with the given bearer token.
    pub async fn create_saved_search(
        &self,
        request: &SaveSearchRequest,
        token: &SecretString,
    ) -> Result<SavedSearchCreated> {
        endpoints::create_saved_search(
            &self.http,
            &self.base_url,
            token,
            request,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}

#[async_trait]
impl SaveSearchOperation for SavedSearchClient {
    async fn save_search(
        &self,
        request: &SaveSearchRequest,
        token: &SecretString,
    ) -> Result<SavedSearchCreated> {
        self.create_saved_search(request, token).await
    }
}
