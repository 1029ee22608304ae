//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "olympus",
    bin_name = "olympus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Project scaffolding with per-user preferences",
    long_about = "Olympus initializes projects from built-in templates and keeps \
                  your scaffolding preferences in ~/.olympus.",
    after_help = "EXAMPLES:\n\
        \x20 olympus init ./my-app --template library\n\
        \x20 olympus config setup\n\
        \x20 olympus config set packageManager npm\n\
        \x20 olympus completions bash > /usr/share/bash-completion/completions/olympus",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize an existing directory from a template.
    #[command(
        about = "Initialize a project",
        after_help = "EXAMPLES:\n\
            \x20 olympus init .\n\
            \x20 olympus init ../api --template service"
    )]
    Init(InitArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 olympus list\n\
            \x20 olympus list --format json"
    )]
    List(ListArgs),

    /// Manage the global preferences file.
    #[command(
        about = "Preference management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 olympus config show\n\
            \x20 olympus config get gitProtocol\n\
            \x20 olympus config set autoupdate true"
    )]
    Config(ConfigCommands),

    /// Manage the global cache.
    #[command(about = "Cache management", subcommand)]
    Cache(CacheCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 olympus completions bash > ~/.local/share/bash-completion/completions/olympus\n\
            \x20 olympus completions zsh  > ~/.zfunc/_olympus\n\
            \x20 olympus completions fish > ~/.config/fish/completions/olympus.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `olympus init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory. Must already exist.
    #[arg(value_name = "PATH", help = "Existing project directory")]
    pub path: PathBuf,

    /// Template to apply. Falls back to `init.default_template` in the CLI
    /// settings, then `basic`.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template to apply"
    )]
    pub template: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `olympus list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `olympus completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `olympus config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print every stored preference.
    Show,
    /// Print the value of one preference.
    Get {
        /// Preference name, e.g. `packageManager`.
        key: String,
    },
    /// Set a preference, keeping the others.
    Set {
        /// Preference name.
        key: String,
        /// New value. `true`/`false` and numbers are stored typed.
        value: String,
    },
    /// Answer the setup questions and save the answers.
    Setup {
        /// Accept every default without prompting.
        #[arg(long = "defaults")]
        defaults: bool,
    },
    /// Replace the preferences file with an empty one.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Print the path to the preferences file.
    Path,
}

// ── cache subcommands ─────────────────────────────────────────────────────────

/// Subcommands for `olympus cache`.
#[derive(Debug, Subcommand)]
pub enum CacheCommands {
    /// Empty the scratch directory.
    Purge,
    /// Print the path to the scratch directory.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_template() {
        let cli = Cli::parse_from(["olympus", "init", "./app", "-t", "library"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.path, PathBuf::from("./app"));
                assert_eq!(args.template.as_deref(), Some("library"));
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_template_is_optional() {
        let cli = Cli::parse_from(["olympus", "init", "."]);
        assert!(matches!(
            cli.command,
            Commands::Init(InitArgs { template: None, .. })
        ));
    }

    #[test]
    fn init_requires_path() {
        assert!(Cli::try_parse_from(["olympus", "init"]).is_err());
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::parse_from(["olympus", "config", "set", "gitProtocol", "https"]);
        match cli.command {
            Commands::Config(ConfigCommands::Set { key, value }) => {
                assert_eq!(key, "gitProtocol");
                assert_eq!(value, "https");
            }
            other => panic!("expected config set, got {other:?}"),
        }
    }

    #[test]
    fn home_flag_is_global() {
        let cli = Cli::parse_from(["olympus", "cache", "path", "--home", "/tmp/h"]);
        assert_eq!(cli.global.home, Some(PathBuf::from("/tmp/h")));
    }

    #[test]
    fn list_alias() {
        let cli = Cli::parse_from(["olympus", "ls"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["olympus", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
