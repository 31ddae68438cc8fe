//! Saved search creation endpoint.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use savesearch_config::constants::SAVED_SEARCHES_PATH;

use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{SaveSearchRequest, SaveSearchResponse, SavedSearchCreated};

/// Create a saved search.
///
/// Sends `POST {base_url}/services/saved/searches?output_mode=json` with the
/// name and query as form fields and the token as a bearer credential.
pub async fn create_saved_search(
    client: &Client,
    base_url: &str,
    token: &SecretString,
    request: &SaveSearchRequest,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<SavedSearchCreated> {
    debug!(name_chars = request.name.chars().count(), "Creating saved search");

    let url = format!("{}{}", base_url, SAVED_SEARCHES_PATH);
    let form = [
        ("name", request.name.as_str()),
        ("search", request.search.as_str()),
    ];

    let builder = client
        .post(&url)
        .bearer_auth(token.expose_secret())
        .query(&[("output_mode", "json")])
        .form(&form);

    let response = send_request_with_retry(
        builder,
        max_retries,
        SAVED_SEARCHES_PATH,
        "POST",
        metrics,
    )
    .await?;

    let body = response.text().await?;
    let parsed: SaveSearchResponse = serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse saved search response: {}", e))
    })?;

    parsed.into_created(&request.name)
}
