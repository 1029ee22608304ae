//! Application layer errors.
//!
//! These errors represent failures while driving the ports, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The filesystem refused to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// The tmp directory, or one of its entries, could not be removed.
    #[error("Failed to purge {path}: {reason}")]
    PurgeFailed { path: PathBuf, reason: String },

    /// Any other filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A config document could not be produced or parsed.
    #[error("Serialization failed ({format}): {reason}")]
    Serialization { format: &'static str, reason: String },

    /// The prompt collaborator failed to obtain an answer.
    #[error("Prompt for '{question}' failed: {reason}")]
    PromptFailed { question: String, reason: String },

    /// No template with this identifier is known.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String, available: Vec<String> },

    /// The user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirectoryUnavailable,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Ensure the parent directory exists".into(),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PurgeFailed { path, .. } => vec![
                format!("Could not clear: {}", path.display()),
                "Check permissions on the entries inside it".into(),
                format!("Remove it manually: rm -rf {}/*", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Serialization { .. } => vec![
                "The config document could not be processed".into(),
                "Reset it with: olympus config reset".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive input is required for this command".into(),
                "Run it from a terminal, or use 'olympus config set'".into(),
            ],
            Self::TemplateNotFound { available, .. } => {
                let mut suggestions = vec!["Available templates:".to_string()];
                for id in available {
                    suggestions.push(format!("  • {}", id));
                }
                suggestions.push("List them with: olympus list".into());
                suggestions
            }
            Self::HomeDirectoryUnavailable => vec![
                "Set OLYMPUS_HOME or pass --home <DIR>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreation { .. }
            | Self::PurgeFailed { .. }
            | Self::FilesystemError { .. }
            | Self::Serialization { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::HomeDirectoryUnavailable => ErrorCategory::Configuration,
        }
    }
}

/// Why the global config could not be read.
///
/// Never returned to callers of `ConfigStore::read`, which degrades to an
/// empty mapping; kept as a type so the cause can be logged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigUnreadable {
    #[error("config file {path} does not exist")]
    Missing { path: PathBuf },

    #[error("config file {path} could not be read: {reason}")]
    Inaccessible { path: PathBuf, reason: String },

    #[error("config file {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
}
