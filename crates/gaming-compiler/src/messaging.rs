//! Shared diagnostic sink
//!
//! Diagnostics accumulate here for the whole compilation. The compiler
//! checks `encountered_error` immediately before emitting primary tuples,
//! so nothing is added once any element anywhere has failed.

use gaming_types::SourceLineNumber;
use serde::Serialize;
use tracing::debug;

use crate::config::CompilerConfig;
use crate::error::GamingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageLevel {
    Warning,
    Error,
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One recorded diagnostic with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source_line: SourceLineNumber,
    pub level: MessageLevel,
    pub error: GamingError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.source_line, self.level, self.error)
    }
}

/// Accumulates diagnostics for one compilation.
#[derive(Debug, Default)]
pub struct Messaging {
    diagnostics: Vec<Diagnostic>,
    warnings_as_errors: bool,
    suppress_warnings: bool,
    encountered_error: bool,
}

impl Messaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CompilerConfig) -> Self {
        Self {
            warnings_as_errors: config.warnings_as_errors,
            suppress_warnings: config.suppress_warnings && !config.warnings_as_errors,
            ..Self::default()
        }
    }

    pub fn error(&mut self, source_line: &SourceLineNumber, error: GamingError) {
        self.write(source_line, MessageLevel::Error, error);
    }

    pub fn warning(&mut self, source_line: &SourceLineNumber, error: GamingError) {
        if self.suppress_warnings {
            debug!(source = %source_line, message = %error, "suppressed warning");
            return;
        }
        let level = if self.warnings_as_errors {
            MessageLevel::Error
        } else {
            MessageLevel::Warning
        };
        self.write(source_line, level, error);
    }

    fn write(&mut self, source_line: &SourceLineNumber, level: MessageLevel, error: GamingError) {
        debug!(source = %source_line, %level, kind = ?error.kind(), message = %error, "diagnostic");
        if level == MessageLevel::Error {
            self.encountered_error = true;
        }
        self.diagnostics.push(Diagnostic {
            source_line: source_line.clone(),
            level,
            error,
        });
    }

    /// True once any error has been recorded in this compilation.
    pub fn encountered_error(&self) -> bool {
        self.encountered_error
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == MessageLevel::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_long() -> GamingError {
        GamingError::IdentifierTooLong {
            element: "Game".into(),
            attribute: "ExecutableFile".into(),
            value: "x".repeat(80),
        }
    }

    fn sln() -> SourceLineNumber {
        SourceLineNumber::new("game.wxs", 3)
    }

    #[test]
    fn test_warning_does_not_trip_gate() {
        let mut messaging = Messaging::new();
        messaging.warning(&sln(), too_long());
        assert!(!messaging.encountered_error());
        assert_eq!(messaging.diagnostics().len(), 1);
        assert_eq!(messaging.diagnostics()[0].level, MessageLevel::Warning);
    }

    #[test]
    fn test_warnings_as_errors() {
        let config = CompilerConfig {
            warnings_as_errors: true,
            ..CompilerConfig::default()
        };
        let mut messaging = Messaging::with_config(&config);
        messaging.warning(&sln(), too_long());
        assert!(messaging.encountered_error());
        assert_eq!(messaging.error_count(), 1);
    }

    #[test]
    fn test_suppressed_warnings_are_dropped() {
        let config = CompilerConfig {
            suppress_warnings: true,
            ..CompilerConfig::default()
        };
        let mut messaging = Messaging::with_config(&config);
        messaging.warning(&sln(), too_long());
        assert!(messaging.diagnostics().is_empty());
    }

    #[test]
    fn test_errors_cannot_be_suppressed() {
        let config = CompilerConfig {
            suppress_warnings: true,
            ..CompilerConfig::default()
        };
        let mut messaging = Messaging::with_config(&config);
        messaging.error(
            &sln(),
            GamingError::ExpectedAttribute {
                element: "Game".into(),
                attribute: "Id".into(),
            },
        );
        assert!(messaging.encountered_error());
        assert_eq!(
            messaging.diagnostics()[0].to_string(),
            "game.wxs(3): error: The Game/@Id attribute was not found; it is required."
        );
    }
}
