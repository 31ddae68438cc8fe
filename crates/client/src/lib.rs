//! Saved-search REST client.
//!
//! Creates saved searches on behalf of a signed-in user and exposes the
//! seams ([`SessionProvider`], [`SaveSearchOperation`]) the TUI is wired through.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod operation;

pub use auth::{SessionProvider, StaticSession, UserSession};
pub use client::{SavedSearchClient, SavedSearchClientBuilder};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{SaveSearchRequest, SaveSearchResponse, SavedSearchCreated};
pub use operation::SaveSearchOperation;
