//! Terminal prompts backed by `dialoguer`.

use dialoguer::{Confirm, Select};
use tracing::instrument;

use olympus_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{ConfigValue, Question, QuestionKind},
    error::{OlympusError, OlympusResult},
};

/// Asks questions on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    #[instrument(skip_all, fields(question = question.name))]
    fn ask(&self, question: &Question) -> OlympusResult<ConfigValue> {
        match &question.kind {
            QuestionKind::Confirm { default } => Confirm::new()
                .with_prompt(question.message)
                .default(*default)
                .interact()
                .map(ConfigValue::Bool)
                .map_err(|e| prompt_failed(question, e)),

            QuestionKind::List { choices, .. } => {
                let index = Select::new()
                    .with_prompt(question.message)
                    .items(*choices)
                    .default(question.default_index())
                    .interact()
                    .map_err(|e| prompt_failed(question, e))?;

                choices
                    .get(index)
                    .map(|choice| ConfigValue::from(*choice))
                    .ok_or_else(|| OlympusError::Internal {
                        message: format!("selection {index} out of range for '{}'", question.name),
                    })
            }
        }
    }
}

fn prompt_failed(question: &Question, e: dialoguer::Error) -> OlympusError {
    ApplicationError::PromptFailed {
        question: question.name.into(),
        reason: e.to_string(),
    }
    .into()
}
