use thiserror::Error;

/// Errors raised by pure domain rules.
///
/// All variants are user-correctable input problems.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid template identifier '{id}': {reason}")]
    InvalidTemplateId { id: String, reason: String },

    #[error("Invalid answer for '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("Invalid config key '{key}': {reason}")]
    InvalidConfigKey { key: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplateId { id, reason } => vec![
                format!("Template '{}' is not a valid identifier: {}", id, reason),
                "Use lowercase letters, digits, '-' and '_'".into(),
                "List available templates: olympus list".into(),
            ],
            Self::InvalidAnswer { question, .. } => vec![
                format!("The answer to '{}' was not accepted", question),
                "Run 'olympus config setup' again".into(),
            ],
            Self::InvalidConfigKey { .. } => vec![
                "Config keys must be non-empty and free of surrounding whitespace".into(),
                "Example: olympus config set packageManager npm".into(),
            ],
        }
    }
}
