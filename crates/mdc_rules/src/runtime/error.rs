//! Structured error types shared by the converter and validator.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Coarse error categories surfaced to the CLI.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RulesErrorCategory {
    /// Invalid or unreadable configuration file.
    Config,
    /// Invalid command-line input (bad dates, unusable paths).
    Usage,
    /// One or more rule files failed validation.
    Validation,
    /// Filesystem or general I/O failure.
    Io,
}

/// Structured error with optional context attached as it propagates.
///
/// The display output stays on one line so it can be printed after `error:` on stderr.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RulesError {
    /// High-level error category.
    pub category: RulesErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for the crate.
pub type RulesResult<T> = Result<T, RulesError>;

impl RulesError {
    /// Create an error with the given category and message.
    pub fn new(category: RulesErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(RulesErrorCategory::Config, message)
    }

    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(RulesErrorCategory::Usage, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(RulesErrorCategory::Validation, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(RulesErrorCategory::Io, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for RulesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [target: {target}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for RulesError {}

impl From<std::io::Error> for RulesError {
    fn from(value: std::io::Error) -> Self {
        RulesError::io(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_in_order() {
        let err = RulesError::io("failed to write rule")
            .with_operation("convert")
            .with_path(Path::new(".cursor/rules/70-database-standards.mdc"))
            .with_hint("check directory permissions");
        assert_eq!(
            err.to_string(),
            "failed to write rule [operation: convert] \
             [target: .cursor/rules/70-database-standards.mdc] \
             [hint: check directory permissions]"
        );
    }

    #[test]
    fn io_errors_map_to_io_category() {
        let err: RulesError = std::io::Error::other("disk full").into();
        assert_eq!(err.category, RulesErrorCategory::Io);
        assert_eq!(err.message, "disk full");
    }
}
