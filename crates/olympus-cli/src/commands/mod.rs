//! Command handlers. Each translates arguments into core calls and prints
//! the result; no business logic lives here.

pub mod cache;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;

use olympus_adapters::{LocalFilesystem, TomlCodec};
use olympus_core::{application::ConfigStore, domain::ConfigPaths};
use tracing::debug;

use crate::{cli::GlobalArgs, config::AppSettings, error::CliResult};

/// Open the global config store under the resolved home directory.
pub(crate) fn open_store(global: &GlobalArgs, settings: &AppSettings) -> CliResult<ConfigStore> {
    let home = settings.resolve_home(global.home.as_deref())?;
    debug!(home = %home.display(), "Resolved home directory");

    Ok(ConfigStore::new(
        ConfigPaths::from_home(home),
        Box::new(LocalFilesystem::new()),
        Box::new(TomlCodec::new()),
    ))
}
