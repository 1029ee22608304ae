//! `olympus cache`: the scratch directory under `~/.olympus`.

use crate::{
    cli::{CacheCommands, GlobalArgs},
    config::AppSettings,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: CacheCommands,
    global: &GlobalArgs,
    settings: &AppSettings,
    output: &OutputManager,
) -> CliResult<()> {
    let store = super::open_store(global, settings)?;

    match cmd {
        CacheCommands::Purge => {
            if !store.tmp_directory_exists() {
                output.info("Nothing to purge.")?;
                return Ok(());
            }
            store.purge_temp_directory()?;
            output.success(&format!("Purged {}", store.tmp_directory().display()))?;
        }
        CacheCommands::Path => output.data(&store.tmp_directory().display().to_string())?,
    }

    Ok(())
}
