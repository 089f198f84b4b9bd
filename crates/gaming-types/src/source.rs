//! Source positions attached to elements, tuples and diagnostics

use serde::{Deserialize, Serialize};

/// Position of an element in its authored source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLineNumber {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

impl SourceLineNumber {
    pub fn new(file_name: impl Into<String>, line_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number: Some(line_number),
        }
    }
}

impl std::fmt::Display for SourceLineNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "{}({})", self.file_name, line),
            None => write!(f, "{}", self.file_name),
        }
    }
}
