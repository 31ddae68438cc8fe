//! Save client creation.
//!
//! Thin wrapper over `SavedSearchClient::builder().from_config(..)` that
//! attaches metrics collection when the exporter is running.

use anyhow::Result;
use savesearch_client::{MetricsCollector, SavedSearchClient};
use savesearch_config::Config;

/// Create the HTTP client used to save searches.
pub fn create_client(config: &Config, metrics_enabled: bool) -> Result<SavedSearchClient> {
    let mut builder = SavedSearchClient::builder().from_config(config);
    if metrics_enabled {
        builder = builder.metrics(MetricsCollector::new());
    }
    Ok(builder.build()?)
}
