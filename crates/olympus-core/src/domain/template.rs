//! Template identifiers and the results of applying a template.
//!
//! The template engine itself lives behind the
//! [`TemplateSetup`](crate::application::ports::TemplateSetup) port; the
//! core only names templates and reports what was written.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Validated template identifier, e.g. `basic` or `web-service`.
///
/// Lowercase ASCII letters, digits, `-` and `_` only, so an identifier can
/// never escape a templates directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.is_empty() {
            return Err(DomainError::InvalidTemplateId {
                id,
                reason: "identifier cannot be empty".into(),
            });
        }
        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::InvalidTemplateId {
                reason: format!("unexpected character '{bad}'"),
                id,
            });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of `olympus list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub description: String,
}

/// Files touched while applying a template to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTemplate {
    pub template: TemplateId,
    /// Files created by this run.
    pub written: Vec<PathBuf>,
    /// Files that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
}

impl AppliedTemplate {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }
}
