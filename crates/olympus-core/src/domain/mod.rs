//! Core domain layer for Olympus.
//!
//! Pure values and rules with no I/O. Where things live on disk
//! ([`ConfigPaths`]), what a preference looks like ([`GlobalConfig`]), which
//! questions the setup flow asks ([`Question`]) and how templates are named
//! ([`TemplateId`]).
//!
//! Everything that touches the filesystem, the terminal, or a serialization
//! format goes through the ports in `crate::application::ports`.

pub mod config;
pub mod error;
pub mod paths;
pub mod question;
pub mod template;

pub use config::{ConfigValue, GlobalConfig};
pub use error::DomainError;
pub use paths::{
    CACHE_DIRECTORY_NAME, CONFIG_FILE_NAME, ConfigPaths, PROJECT_CACHE_DIRECTORY_NAME,
    TMP_DIRECTORY_NAME,
};
pub use question::{AnswerFilter, Question, QuestionKind, default_questions};
pub use template::{AppliedTemplate, TemplateId, TemplateSummary};
