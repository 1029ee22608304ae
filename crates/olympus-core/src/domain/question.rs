//! Interactive question definitions.
//!
//! A [`Question`] describes *what* to ask; asking it is the job of a
//! [`Prompter`](crate::application::ports::Prompter). The raw answer comes
//! back to the core, which applies the question's [`AnswerFilter`] and checks
//! it against the question kind before anything is persisted.

use crate::domain::{config::ConfigValue, error::DomainError};

pub const AUTOUPDATE: &str = "autoupdate";
pub const PACKAGE_MANAGER: &str = "packageManager";
pub const GIT_PROTOCOL: &str = "gitProtocol";

/// Normalisation applied to a raw answer before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFilter {
    Lowercase,
}

impl AnswerFilter {
    pub fn apply(self, value: ConfigValue) -> ConfigValue {
        match (self, value) {
            (Self::Lowercase, ConfigValue::String(s)) => ConfigValue::String(s.to_lowercase()),
            (_, other) => other,
        }
    }
}

/// The shape of the expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Yes/no, answered with a boolean.
    Confirm { default: bool },
    /// Single choice from an enumerated set.
    List {
        choices: &'static [&'static str],
        default: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub filter: Option<AnswerFilter>,
}

impl Question {
    pub fn confirm(name: &'static str, message: &'static str, default: bool) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Confirm { default },
            filter: None,
        }
    }

    pub fn list(
        name: &'static str,
        message: &'static str,
        choices: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::List { choices, default },
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: AnswerFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The answer used when the user just presses enter.
    pub fn default_value(&self) -> ConfigValue {
        match &self.kind {
            QuestionKind::Confirm { default } => ConfigValue::Bool(*default),
            QuestionKind::List { default, .. } => ConfigValue::from(*default),
        }
    }

    /// Index of the default choice, for list prompts.
    pub fn default_index(&self) -> usize {
        match &self.kind {
            QuestionKind::Confirm { .. } => 0,
            QuestionKind::List { choices, default } => {
                choices.iter().position(|c| c == default).unwrap_or(0)
            }
        }
    }

    /// Filter a raw answer and check it fits this question.
    pub fn finalize(&self, raw: ConfigValue) -> Result<ConfigValue, DomainError> {
        let value = match self.filter {
            Some(filter) => filter.apply(raw),
            None => raw,
        };

        match (&self.kind, &value) {
            (QuestionKind::Confirm { .. }, ConfigValue::Bool(_)) => Ok(value),
            (QuestionKind::List { choices, .. }, ConfigValue::String(s)) => {
                if choices.contains(&s.as_str()) {
                    Ok(value)
                } else {
                    Err(DomainError::InvalidAnswer {
                        question: self.name.into(),
                        reason: format!("'{s}' is not one of: {}", choices.join(", ")),
                    })
                }
            }
            (QuestionKind::Confirm { .. }, other) => Err(DomainError::InvalidAnswer {
                question: self.name.into(),
                reason: format!("expected a boolean, got a {}", other.kind()),
            }),
            (QuestionKind::List { .. }, other) => Err(DomainError::InvalidAnswer {
                question: self.name.into(),
                reason: format!("expected a choice, got a {}", other.kind()),
            }),
        }
    }
}

/// The preference questions asked by `olympus config setup`, in order.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::confirm(AUTOUPDATE, "Turn on autoupdate?", false),
        Question::list(
            PACKAGE_MANAGER,
            "Which package manager do you use?",
            &["yarn", "npm"],
            "yarn",
        )
        .with_filter(AnswerFilter::Lowercase),
        Question::list(
            GIT_PROTOCOL,
            "Which git protocol do you prefer?",
            &["ssh", "https"],
            "ssh",
        )
        .with_filter(AnswerFilter::Lowercase),
    ]
}
