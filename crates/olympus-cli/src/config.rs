//! CLI settings.
//!
//! [`AppSettings`] is loaded once at startup and passed down by reference.
//! These are the CLI's own runtime settings; user preferences live in the
//! global config file managed by `olympus_core::application::ConfigStore`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `OLYMPUS_HOME`, `OLYMPUS_OUTPUT__NO_COLOR`,
//!    `OLYMPUS_INIT__DEFAULT_TEMPLATE`
//! 3. Settings file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! home = "/srv/olympus"
//!
//! [output]
//! no_color = true
//!
//! [init]
//! default_template = "library"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use olympus_core::application::ApplicationError;

use crate::error::{CliError, CliResult};

pub const DEFAULT_TEMPLATE: &str = "basic";

const ENV_PREFIX: &str = "OLYMPUS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Directory that holds `.olympus/`.
    pub home: Option<PathBuf>,
    pub output: OutputSettings,
    pub init: InitSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    pub default_template: String,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE.into(),
        }
    }
}

impl AppSettings {
    /// Layer defaults, the settings file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading CLI settings");

        Config::builder()
            .set_default("output.no_color", false)?
            .set_default("init.default_template", DEFAULT_TEMPLATE)?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Default settings file location.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.olympus.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "olympus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".olympus.toml"))
    }

    /// Pick the home directory: flag or `OLYMPUS_HOME`, then settings, then
    /// the platform home.
    pub fn resolve_home(&self, flag: Option<&Path>) -> CliResult<PathBuf> {
        if let Some(home) = flag.or(self.home.as_deref()) {
            return Ok(home.to_path_buf());
        }
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| CliError::Core(ApplicationError::HomeDirectoryUnavailable.into()))
    }
}
