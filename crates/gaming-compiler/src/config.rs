//! Compiler configuration

use serde::{Deserialize, Serialize};

/// Knobs controlling how diagnostics are treated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Treat every warning as an error (blocks emission like any error).
    pub warnings_as_errors: bool,
    /// Drop warnings instead of recording them.
    pub suppress_warnings: bool,
}
