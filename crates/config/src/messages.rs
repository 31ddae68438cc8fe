//! Localizable message catalog for user-facing strings.
//!
//! Responsibilities:
//! - Provide lookup of UI strings by stable message identifier.
//! - Load overrides from a JSON object file (`{"apiError": "...", ...}`).
//!
//! Does NOT handle:
//! - Pluralization or argument interpolation.
//! - Choosing a locale (the catalog path is configured explicitly).
//!
//! Invariants:
//! - Every `MessageKey` always resolves to a string; missing entries fall
//!   back to the built-in English text.
//! - Unknown keys in a catalog file are ignored (logged at debug level).

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::loader::ConfigError;

/// Stable identifiers for every user-facing string of the save-search modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    ToggleText,
    NameLabel,
    SaveText,
    CancelText,
    SavingText,
    EmptyNameError,
    ApiError,
    SuccessTitle,
    SuccessDescription,
}

impl MessageKey {
    /// All keys, in catalog order.
    pub const ALL: [MessageKey; 10] = [
        MessageKey::Title,
        MessageKey::ToggleText,
        MessageKey::NameLabel,
        MessageKey::SaveText,
        MessageKey::CancelText,
        MessageKey::SavingText,
        MessageKey::EmptyNameError,
        MessageKey::ApiError,
        MessageKey::SuccessTitle,
        MessageKey::SuccessDescription,
    ];

    /// Identifier used in catalog files.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ToggleText => "toggleText",
            Self::NameLabel => "nameLabel",
            Self::SaveText => "saveText",
            Self::CancelText => "cancelText",
            Self::SavingText => "savingText",
            Self::EmptyNameError => "emptyNameError",
            Self::ApiError => "apiError",
            Self::SuccessTitle => "successTitle",
            Self::SuccessDescription => "successDescription",
        }
    }

    /// Parse a catalog identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    const fn default_text(self) -> &'static str {
        match self {
            Self::Title => "Name this search query",
            Self::ToggleText => "Save search",
            Self::NameLabel => "Name",
            Self::SaveText => "Save",
            Self::CancelText => "Cancel",
            Self::SavingText => "Saving...",
            Self::EmptyNameError => "Please name this query.",
            Self::ApiError => "Error saving the search. Please try again.",
            Self::SuccessTitle => "Query successfully saved",
            Self::SuccessDescription => "You can view and manage your saved searches from your account.",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Message catalog.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<MessageKey, String>,
}

impl Messages {
    /// Catalog that returns the built-in English strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog whose every lookup returns the message identifier itself.
    ///
    /// Useful in tests that assert on which message is shown rather than its wording.
    pub fn keys() -> Self {
        Self {
            overrides: MessageKey::ALL
                .into_iter()
                .map(|k| (k, k.id().to_string()))
                .collect(),
        }
    }

    /// Load a catalog from a JSON object file, layered over the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::MessagesRead {
            path: path.to_path_buf(),
        })?;
        Self::from_json_str(&content).map_err(|_| ConfigError::MessagesParse {
            path: path.to_path_buf(),
        })
    }

    /// Parse a catalog from JSON text. Non-string values are rejected.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Value> = serde_json::from_str(content)?;
        let mut overrides = HashMap::new();
        for (id, value) in raw {
            let Some(key) = MessageKey::from_id(&id) else {
                tracing::debug!(key = %id, "Ignoring unknown message key");
                continue;
            };
            match value {
                Value::String(text) => {
                    overrides.insert(key, text);
                }
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "message '{id}' must be a string, got {other}"
                    )));
                }
            }
        }
        Ok(Self { overrides })
    }

    /// Look up a message.
    pub fn get(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_resolve_every_key() {
        let messages = Messages::new();
        for key in MessageKey::ALL {
            assert!(!messages.get(key).is_empty(), "{key} has no text");
        }
        assert_eq!(messages.get(MessageKey::CancelText), "Cancel");
    }

    #[test]
    fn test_keys_catalog_echoes_identifiers() {
        let messages = Messages::keys();
        assert_eq!(messages.get(MessageKey::EmptyNameError), "emptyNameError");
        assert_eq!(messages.get(MessageKey::ApiError), "apiError");
        assert_eq!(
            messages.get(MessageKey::SuccessDescription),
            "successDescription"
        );
        assert_eq!(messages.get(MessageKey::CancelText), "cancelText");
    }

    #[test]
    fn test_id_round_trip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id("nope"), None);
    }

    #[test]
    fn test_json_overrides_and_fallback() {
        let messages =
            Messages::from_json_str(r#"{"cancelText": "Annuler", "unknownKey": "x"}"#).unwrap();
        assert_eq!(messages.get(MessageKey::CancelText), "Annuler");
        assert_eq!(messages.get(MessageKey::SaveText), "Save");
    }

    #[test]
    fn test_json_rejects_non_string_values() {
        assert!(Messages::from_json_str(r#"{"cancelText": 3}"#).is_err());
        assert!(Messages::from_json_str("[]").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"apiError": "Something broke"}}"#).unwrap();

        let messages = Messages::from_file(file.path()).unwrap();
        assert_eq!(messages.get(MessageKey::ApiError), "Something broke");
    }

    #[test]
    fn test_from_file_errors() {
        let missing = Messages::from_file(Path::new("/nonexistent/messages.json"));
        assert!(matches!(missing, Err(ConfigError::MessagesRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let malformed = Messages::from_file(file.path());
        assert!(matches!(malformed, Err(ConfigError::MessagesParse { .. })));
    }
}
