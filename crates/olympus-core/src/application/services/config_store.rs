//! Config Store - the single authority over persistent Olympus state.
//!
//! Owns the derived [`ConfigPaths`] and performs every read, write, create
//! and purge of the global config file, the global tmp directory and
//! per-project cache directories.
//!
//! ## Fail-soft reads
//!
//! A missing config file is the normal state for a first-time user, so
//! [`ConfigStore::read`] never fails: any [`ConfigUnreadable`] cause is
//! logged and mapped to an empty [`GlobalConfig`]. Callers that need the
//! cause use [`ConfigStore::try_read`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ConfigUnreadable,
        ports::{ConfigCodec, Filesystem, Prompter},
    },
    domain::{ConfigPaths, ConfigValue, GlobalConfig, default_questions},
    error::{OlympusError, OlympusResult},
};

pub struct ConfigStore {
    paths: ConfigPaths,
    filesystem: Box<dyn Filesystem>,
    codec: Box<dyn ConfigCodec>,
}

impl ConfigStore {
    pub fn new(
        paths: ConfigPaths,
        filesystem: Box<dyn Filesystem>,
        codec: Box<dyn ConfigCodec>,
    ) -> Self {
        Self {
            paths,
            filesystem,
            codec,
        }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// The global config file path.
    pub fn location(&self) -> &Path {
        self.paths.config_file()
    }

    /// The global cache root.
    pub fn cache_directory(&self) -> &Path {
        self.paths.cache_directory()
    }

    /// The scratch directory under the cache root.
    pub fn tmp_directory(&self) -> &Path {
        self.paths.tmp_directory()
    }

    pub fn file_exists(&self) -> bool {
        self.filesystem.exists(self.location())
    }

    pub fn tmp_directory_exists(&self) -> bool {
        self.filesystem.is_dir(self.tmp_directory())
    }

    /// Reset the global config to an empty mapping and ensure the tmp
    /// directory exists.
    ///
    /// Overwrites any existing config unconditionally.
    #[instrument(skip_all, fields(path = %self.location().display()))]
    pub fn create_file(&self) -> OlympusResult<()> {
        self.write(&GlobalConfig::new())?;
        self.ensure_temp_directory()?;
        info!("Global config reset");
        Ok(())
    }

    pub fn ensure_temp_directory(&self) -> OlympusResult<()> {
        let tmp = self.tmp_directory();
        self.filesystem
            .create_dir_all(tmp)
            .map_err(|e| directory_creation(tmp, e))
    }

    /// Remove everything inside the tmp directory, keeping the directory.
    #[instrument(skip_all, fields(path = %self.tmp_directory().display()))]
    pub fn purge_temp_directory(&self) -> OlympusResult<()> {
        let tmp = self.tmp_directory();
        self.filesystem.remove_dir_contents(tmp).map_err(|e| {
            OlympusError::from(ApplicationError::PurgeFailed {
                path: tmp.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        debug!("Tmp directory purged");
        Ok(())
    }

    /// Ensure `<project>/olympus` exists and return it.
    ///
    /// The project directory itself must already exist; it is never created
    /// here.
    #[instrument(skip(self), fields(project = %project.display()))]
    pub fn create_project_cache(&self, project: &Path) -> OlympusResult<PathBuf> {
        let cache = self.paths.project_cache_for(project);
        self.filesystem
            .create_dir(&cache)
            .map_err(|e| directory_creation(&cache, e))?;
        debug!(cache = %cache.display(), "Project cache ready");
        Ok(cache)
    }

    /// Read the global config, or explain why it could not be read.
    pub fn try_read(&self) -> Result<GlobalConfig, ConfigUnreadable> {
        let path = self.location();

        if !self.filesystem.exists(path) {
            return Err(ConfigUnreadable::Missing {
                path: path.to_path_buf(),
            });
        }

        let text =
            self.filesystem
                .read_to_string(path)
                .map_err(|e| ConfigUnreadable::Inaccessible {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;

        self.codec
            .parse(&text)
            .map_err(|e| ConfigUnreadable::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Read the global config, degrading to an empty mapping on any failure.
    pub fn read(&self) -> GlobalConfig {
        match self.try_read() {
            Ok(config) => config,
            Err(cause @ ConfigUnreadable::Missing { .. }) => {
                debug!(%cause, "No global config yet, using defaults");
                GlobalConfig::new()
            }
            Err(cause) => {
                warn!(%cause, "Ignoring unreadable global config, using defaults");
                GlobalConfig::new()
            }
        }
    }

    /// Serialize `values` and replace the global config with it.
    ///
    /// No merge: keys absent from `values` are dropped from the file.
    #[instrument(skip_all, fields(keys = values.len()))]
    pub fn write(&self, values: &GlobalConfig) -> OlympusResult<()> {
        let text = self.codec.to_text(values)?;

        let cache = self.cache_directory();
        self.filesystem
            .create_dir_all(cache)
            .map_err(|e| directory_creation(cache, e))?;

        self.filesystem.overwrite(self.location(), &text)?;
        debug!("Global config written");
        Ok(())
    }

    /// Look up a single preference.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.read().get(key).cloned()
    }

    /// Read-modify-write a single preference, returning the new mapping.
    pub fn set(&self, key: &str, value: ConfigValue) -> OlympusResult<GlobalConfig> {
        GlobalConfig::validate_key(key)?;
        let mut config = self.read();
        config.insert(key, value);
        self.write(&config)?;
        Ok(config)
    }

    /// Ask the preference questions in order and persist the answers.
    ///
    /// Each raw answer is passed through its question's filter before it is
    /// stored. Nothing is written if any question fails.
    #[instrument(skip_all)]
    pub fn interactively_update(&self, prompter: &dyn Prompter) -> OlympusResult<GlobalConfig> {
        let mut answers = GlobalConfig::new();

        for question in default_questions() {
            let raw = prompter.ask(&question)?;
            let value = question.finalize(raw)?;
            debug!(question = question.name, %value, "Answer recorded");
            answers.insert(question.name, value);
        }

        self.write(&answers)?;
        info!(keys = answers.len(), "Preferences updated");
        Ok(answers)
    }
}

fn directory_creation(path: &Path, err: OlympusError) -> OlympusError {
    match err {
        OlympusError::Application(ApplicationError::DirectoryCreation { .. }) => err,
        other => ApplicationError::DirectoryCreation {
            path: path.to_path_buf(),
            reason: other.to_string(),
        }
        .into(),
    }
}
