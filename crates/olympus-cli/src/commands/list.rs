//! Implementation of the `olympus list` command.

use olympus_adapters::{BuiltinTemplates, LocalFilesystem};
use olympus_core::application::ports::TemplateSetup;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let templates = BuiltinTemplates::new(Box::new(LocalFilesystem::new())).available();

    let format = match output.format() {
        OutputFormat::Json => ListFormat::Json,
        _ => args.format,
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            let width = templates
                .iter()
                .map(|t| t.id.as_str().len())
                .max()
                .unwrap_or(0);
            for template in &templates {
                output.print(&format!(
                    "  {:width$}  {}",
                    template.id.as_str(),
                    template.description,
                ))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                output.data(template.id.as_str())?;
            }
        }

        ListFormat::Json => {
            let rows: Vec<_> = templates
                .iter()
                .map(|t| serde_json::json!({ "id": t.id.as_str(), "description": t.description }))
                .collect();
            let json = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
            output.data(&json)?;
        }
    }

    Ok(())
}
