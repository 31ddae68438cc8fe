//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Any other non-success status is converted into
//! `ClientError::ApiError` immediately.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ServerMessages;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// - Backoff is 2^attempt seconds (1s, 2s, 4s, ...)
/// - `max_retries` of 0 means a single attempt
/// - Returns `MaxRetriesExceeded` when retries are exhausted
///
/// `endpoint` and `method` are only used as metric labels.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        // Form bodies are always clonable; a streaming body gets one attempt.
        let Some(attempt_builder) = builder.try_clone() else {
            if attempt == 0 {
                debug!("Request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(ClientError::from);
            }
            return Err(ClientError::MaxRetriesExceeded(attempt));
        };

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
            if attempt > 0 {
                m.record_retry(endpoint, method, attempt);
            }
        }

        let started = Instant::now();
        let outcome = attempt_builder.send().await;

        if let Some(m) = metrics {
            let status = outcome.as_ref().ok().map(|r| r.status().as_u16());
            m.record_request_duration(endpoint, method, started.elapsed(), status);
        }

        match outcome {
            Ok(response) if ClientError::is_retryable_status(response.status().as_u16()) => {
                if attempt < max_retries {
                    let backoff_secs = 2u64.pow(attempt as u32);
                    debug!(
                        attempt = attempt + 1,
                        max_retries = max_retries + 1,
                        backoff_secs = backoff_secs,
                        "Rate limited (HTTP 429), retrying with exponential backoff"
                    );

                    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                } else {
                    debug!(
                        attempts = attempt + 1,
                        "Max retries exhausted for rate-limited request"
                    );
                    let err = ClientError::MaxRetriesExceeded(max_retries + 1);
                    if let Some(m) = metrics {
                        m.record_client_error(endpoint, method, &err);
                    }
                    return Err(err);
                }
            }
            Ok(response) if response.status().is_success() => {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(response);
            }
            Ok(response) => {
                let err = api_error_from_response(response).await;
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
            Err(e) => {
                let err = ClientError::from(e);
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Build an `ApiError`, preferring the server's `messages` array over the raw body.
async fn api_error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ServerMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m
            .messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; "),
        _ => body,
    };

    ClientError::ApiError {
        status,
        url,
        message,
    }
}
