//! Values handed down from the enclosing host element.

use std::collections::HashMap;

use gaming_types::SourceLineNumber;
use serde::{Deserialize, Serialize};

use crate::error::GamingError;
use crate::messaging::Messaging;

pub const FILE_ID: &str = "FileId";
pub const COMPONENT_ID: &str = "ComponentId";
pub const DIRECTORY_ID: &str = "DirectoryId";
pub const PROG_ID: &str = "ProgId";
pub const EXTENSION_ID: &str = "ExtensionId";

/// String context map supplied by the host for the element being parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextValues(HashMap<String, String>);

impl ContextValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Fetch a required value, recording `MissingContextValue` when absent.
    pub(crate) fn require(
        &self,
        key: &str,
        element: &str,
        source_line: &SourceLineNumber,
        messaging: &mut Messaging,
    ) -> Option<String> {
        let value = self.get(key).map(str::to_string);
        if value.is_none() {
            messaging.error(
                source_line,
                GamingError::MissingContextValue {
                    element: element.to_string(),
                    key: key.to_string(),
                },
            );
        }
        value
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContextValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Context of a `File` element: the game executable and its component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileContext {
    pub file_id: String,
    pub component_id: String,
    /// Directory of the owning component; the play task working directory.
    pub directory_id: String,
}

impl FileContext {
    pub(crate) fn resolve(
        context: &ContextValues,
        element: &str,
        source_line: &SourceLineNumber,
        messaging: &mut Messaging,
    ) -> Option<Self> {
        let file_id = context.require(FILE_ID, element, source_line, messaging);
        let component_id = context.require(COMPONENT_ID, element, source_line, messaging);
        let directory_id = context.require(DIRECTORY_ID, element, source_line, messaging);
        Some(Self {
            file_id: file_id?,
            component_id: component_id?,
            directory_id: directory_id?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_and_get() {
        let context: ContextValues = [(FILE_ID, "GameExe"), (COMPONENT_ID, "GameComp")]
            .into_iter()
            .collect();
        assert_eq!(context.get(FILE_ID), Some("GameExe"));
        assert_eq!(context.get(PROG_ID), None);
    }

    #[test]
    fn test_file_context_reports_every_missing_key() {
        let mut messaging = Messaging::new();
        let context = ContextValues::new().with(FILE_ID, "GameExe");
        let resolved = FileContext::resolve(&context, "Game", &SourceLineNumber::default(), &mut messaging);

        assert!(resolved.is_none());
        assert_eq!(messaging.error_count(), 2);
    }

    #[test]
    fn test_file_context_resolves() {
        let mut messaging = Messaging::new();
        let context = ContextValues::new()
            .with(FILE_ID, "GameExe")
            .with(COMPONENT_ID, "GameComp")
            .with(DIRECTORY_ID, "INSTALLFOLDER");
        let resolved =
            FileContext::resolve(&context, "Game", &SourceLineNumber::default(), &mut messaging).unwrap();

        assert_eq!(resolved.component_id, "GameComp");
        assert!(!messaging.encountered_error());
    }

    #[test]
    fn test_context_is_a_plain_json_map() {
        let context: ContextValues =
            serde_json::from_str(r#"{ "FileId": "GameExe", "ComponentId": "GameComp" }"#).unwrap();
        assert_eq!(context.get(COMPONENT_ID), Some("GameComp"));
    }
}
