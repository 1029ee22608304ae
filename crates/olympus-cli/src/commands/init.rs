//! `olympus init <PATH>`: prepare the project cache and apply a template.

use std::path::Path;

use tracing::{info, instrument};

use olympus_adapters::{BuiltinTemplates, LocalFilesystem};
use olympus_core::{
    application::{InitOutcome, InitService},
    domain::{AppliedTemplate, TemplateId},
    error::OlympusError,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppSettings,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    settings: &AppSettings,
    output: &OutputManager,
) -> CliResult<()> {
    let template: TemplateId = args
        .template
        .as_deref()
        .unwrap_or(&settings.init.default_template)
        .parse()
        .map_err(|e| CliError::Core(OlympusError::from(e)))?;

    let project = std::path::absolute(&args.path)
        .with_cli_context(|| format!("Failed to resolve '{}'", args.path.display()))?;

    let store = super::open_store(global, settings)?;
    let service = InitService::new(
        &store,
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new(Box::new(LocalFilesystem::new()))),
    );

    let spinner = output.spinner("Initializing project...");
    let outcome = service.init(&project, &template);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome? {
        InitOutcome::PathNotFound { .. } => Err(CliError::PathNotFound { path: args.path }),
        InitOutcome::Completed {
            project_cache,
            applied,
            ..
        } => {
            info!(cache = %project_cache.display(), "Project initialized");
            report(&project, &applied, output)?;
            output.success("Initialization complete.")?;
            Ok(())
        }
    }
}

fn report(project: &Path, applied: &AppliedTemplate, output: &OutputManager) -> CliResult<()> {
    let relative = |path: &Path| {
        path.strip_prefix(project)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    output.header(&format!("Template '{}':", applied.template))?;
    for path in &applied.written {
        output.print(&format!("  created  {}", relative(path)))?;
    }
    for path in &applied.skipped {
        output.warning(&format!("kept existing {}", relative(path)))?;
    }
    Ok(())
}
