//! `olympus config`: read and write the global preferences.

use tracing::instrument;

use olympus_core::{
    application::{ConfigStore, ports::Prompter},
    domain::{ConfigValue, GlobalConfig},
};

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppSettings,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
#[instrument(skip_all)]
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    settings: &AppSettings,
    output: &OutputManager,
) -> CliResult<()> {
    let store = super::open_store(global, settings)?;

    match cmd {
        ConfigCommands::Show => show(&store.read(), output)?,

        ConfigCommands::Get { key } => match store.get(&key) {
            Some(value) => output.data(&value.to_string())?,
            None => return Err(CliError::UnknownKey { key }),
        },

        ConfigCommands::Set { key, value } => {
            let value = ConfigValue::parse_loose(&value);
            store.set(&key, value.clone())?;
            output.success(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Setup { defaults } => {
            if !store.file_exists() {
                store.create_file()?;
            }
            let prompter = prompter(defaults)?;
            let answers = store.interactively_update(prompter.as_ref())?;
            show(&answers, output)?;
            output.success(&format!("Saved to {}", store.location().display()))?;
        }

        ConfigCommands::Reset { yes } => {
            if !yes && !confirm_reset(&store)? {
                output.info("Nothing changed.")?;
                return Ok(());
            }
            store.create_file()?;
            output.success(&format!("Reset {}", store.location().display()))?;
        }

        ConfigCommands::Path => output.data(&store.location().display().to_string())?,
    }

    Ok(())
}

fn show(config: &GlobalConfig, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(config).map_err(std::io::Error::from)?;
        output.data(&json)?;
        return Ok(());
    }

    if config.is_empty() {
        output.info("No preferences set. Run 'olympus config setup'.")?;
        return Ok(());
    }
    for (key, value) in config.iter() {
        output.data(&format!("{key} = {value}"))?;
    }
    Ok(())
}

/// Pick a prompter: scripted defaults, or the terminal when available.
fn prompter(defaults: bool) -> CliResult<Box<dyn Prompter>> {
    if defaults {
        return Ok(Box::new(olympus_adapters::ScriptedPrompter::new()));
    }
    terminal_prompter()
}

#[cfg(feature = "interactive")]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "setup needs an interactive terminal; pass --defaults to skip the questions"
                .into(),
            source: None,
        });
    }
    Ok(Box::new(olympus_adapters::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Ask before wiping an existing file. Non-interactive runs must pass `--yes`.
#[cfg(feature = "interactive")]
fn confirm_reset(store: &ConfigStore) -> CliResult<bool> {
    use std::io::IsTerminal;

    if !store.file_exists() {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "refusing to reset without confirmation; pass --yes".into(),
            source: None,
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("Replace {} with an empty file?", store.location().display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "confirmation prompt failed".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_reset(store: &ConfigStore) -> CliResult<bool> {
    if !store.file_exists() {
        return Ok(true);
    }
    Err(CliError::InvalidInput {
        message: "refusing to reset without confirmation; pass --yes".into(),
        source: None,
    })
}
