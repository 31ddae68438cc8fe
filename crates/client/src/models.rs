//! Saved search request and response models.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Parameters for creating a saved search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SaveSearchRequest {
    /// Name chosen by the user (already trimmed and non-empty).
    pub name: String,
    /// The search query being saved. May be empty.
    pub search: String,
}

impl SaveSearchRequest {
    pub fn new(name: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: search.into(),
        }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearchCreated {
    /// Server-assigned identifier.
    pub id: String,
    /// Name the search was saved under.
    #[serde(default)]
    pub name: String,
}

/// Entry of a collection response (`{"entry": [{"name": .., "id": ..}]}`).
#[derive(Debug, Deserialize, Clone)]
pub struct SavedSearchEntry {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Response body of the create call.
///
/// The collection form is what the REST API returns; the bare `{"id": ..}`
/// form is accepted from simpler backends.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SaveSearchResponse {
    Collection { entry: Vec<SavedSearchEntry> },
    Created { id: String },
}

impl SaveSearchResponse {
    /// Resolve the created search. An entry without `id` is identified by its name.
    pub fn into_created(self, requested_name: &str) -> Result<SavedSearchCreated> {
        match self {
            Self::Collection { entry } => {
                let first = entry.into_iter().next().ok_or_else(|| {
                    ClientError::InvalidResponse("Saved search response has no entries".to_string())
                })?;
                Ok(SavedSearchCreated {
                    id: first.id.unwrap_or_else(|| first.name.clone()),
                    name: first.name,
                })
            }
            Self::Created { id } => Ok(SavedSearchCreated {
                id,
                name: requested_name.to_string(),
            }),
        }
    }
}

/// Server error messages (`{"messages": [{"type": "ERROR", "text": ".."}]}`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerMessages {
    pub messages: Vec<ServerMessage>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}
