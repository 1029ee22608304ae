//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `olympus-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppliedTemplate, ConfigValue, GlobalConfig, Question, TemplateId, TemplateSummary,
};
use crate::error::OlympusResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `olympus_adapters::filesystem::LocalFilesystem` (production)
/// - `olympus_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory whose parent must already exist.
    ///
    /// Succeeds without change when the directory is already there.
    fn create_dir(&self, path: &Path) -> OlympusResult<()>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> OlympusResult<()>;

    /// Remove everything inside `path`, keeping `path` itself.
    fn remove_dir_contents(&self, path: &Path) -> OlympusResult<()>;

    /// Replace the contents of a file, creating it if absent.
    ///
    /// The parent directory must exist.
    fn overwrite(&self, path: &Path, content: &str) -> OlympusResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> OlympusResult<String>;
}

/// Port for turning a [`GlobalConfig`] into text and back.
///
/// Implemented by `olympus_adapters::codec::TomlCodec`.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigCodec: Send + Sync {
    /// Serialize the whole mapping.
    fn to_text(&self, config: &GlobalConfig) -> OlympusResult<String>;

    /// Parse a document; fails on malformed input.
    fn parse(&self, text: &str) -> OlympusResult<GlobalConfig>;
}

/// Port for asking the user a question.
///
/// Implemented by:
/// - `olympus_adapters::prompt::DialoguerPrompter` (terminal, feature `interactive`)
/// - `olympus_adapters::prompt::ScriptedPrompter` (canned answers)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask one question and return the raw, unfiltered answer.
    fn ask(&self, question: &Question) -> OlympusResult<ConfigValue>;
}

/// Port for template staging and application.
///
/// Implemented by `olympus_adapters::templates::BuiltinTemplates`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSetup: Send + Sync {
    /// Write initializer metadata into a project cache directory.
    ///
    /// Returns the path of the file written.
    fn stage_init_file(&self, project_cache: &Path) -> OlympusResult<PathBuf>;

    /// Materialize `template` into `project`.
    fn apply_template(
        &self,
        project: &Path,
        template: &TemplateId,
    ) -> OlympusResult<AppliedTemplate>;

    /// Templates this collaborator knows about.
    fn available(&self) -> Vec<TemplateSummary>;
}
