//! Canned answers, for tests and non-interactive runs.

use std::collections::HashMap;

use olympus_core::{
    application::ports::Prompter,
    domain::{ConfigValue, Question},
    error::OlympusResult,
};
use tracing::debug;

/// Answers from a fixed map; unanswered questions take their default.
///
/// Answers are returned raw, exactly as scripted. Filtering is the core's
/// job, just as it is for a real terminal answer.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, ConfigValue>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, question: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.answers.insert(question.into(), value.into());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &Question) -> OlympusResult<ConfigValue> {
        match self.answers.get(question.name) {
            Some(value) => Ok(value.clone()),
            None => {
                debug!(question = question.name, "No scripted answer, using default");
                Ok(question.default_value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use olympus_core::domain::default_questions;

    use super::*;

    #[test]
    fn scripted_answers_are_raw() {
        let prompter = ScriptedPrompter::new().answer("packageManager", "NPM");
        let question = &default_questions()[1];
        assert_eq!(
            prompter.ask(question).unwrap(),
            ConfigValue::from("NPM")
        );
    }

    #[test]
    fn missing_answers_use_defaults() {
        let prompter = ScriptedPrompter::new();
        let answers: Vec<_> = default_questions()
            .iter()
            .map(|q| prompter.ask(q).unwrap())
            .collect();
        assert_eq!(
            answers,
            vec![
                ConfigValue::Bool(false),
                ConfigValue::from("yarn"),
                ConfigValue::from("ssh"),
            ]
        );
    }
}
