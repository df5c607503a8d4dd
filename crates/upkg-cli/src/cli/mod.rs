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
    name    = "upkg",
    bin_name = "upkg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Unity package bootstrapper",
    long_about = "Upkg turns a fresh Unity project into a distributable \
                  package: manifest, assembly definitions, and project \
                  settings, derived from a company and project name.",
    after_help = "EXAMPLES:\n\
        \x20 upkg init Widgets --company Acme\n\
        \x20 upkg init Widgets --company Acme --no-editor --force\n\
        \x20 upkg config list\n\
        \x20 upkg completions bash > /usr/share/bash-completion/completions/upkg",
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
    /// Initialise package metadata in a Unity project.
    #[command(
        visible_alias = "i",
        about = "Initialise package metadata",
        after_help = "EXAMPLES:\n\
            \x20 upkg init Widgets --company Acme\n\
            \x20 upkg init Widgets --company Acme --unity-version 2021.3.12f1\n\
            \x20 upkg init Widgets --company Acme --cleanup --yes"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 upkg completions bash > ~/.local/share/bash-completion/completions/upkg\n\
            \x20 upkg completions zsh  > ~/.zfunc/_upkg\n\
            \x20 upkg completions fish > ~/.config/fish/completions/upkg.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the upkg configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 upkg config get defaults.company\n\
            \x20 upkg config set defaults.company Acme\n\
            \x20 upkg config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `upkg init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name.  PascalCase, at least two characters, letters and
    /// digits only.  Prompted for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name (e.g. Widgets)")]
    pub name: Option<String>,

    /// Company name used to derive the package identifier.
    #[arg(
        long = "company",
        value_name = "COMPANY",
        help = "Company name (falls back to config)"
    )]
    pub company: Option<String>,

    /// Skip the editor assembly definition.
    #[arg(long = "no-editor", help = "Do not generate an editor assembly")]
    pub no_editor: bool,

    /// Assets directory of the Unity project.
    #[arg(
        long = "assets-dir",
        value_name = "DIR",
        help = "Assets directory (default: Assets)"
    )]
    pub assets_dir: Option<PathBuf>,

    /// Unity editor version override.
    #[arg(
        long = "unity-version",
        value_name = "VERSION",
        help = "Unity version (default: read from ProjectSettings)"
    )]
    pub unity_version: Option<String>,

    /// Overwrite existing assembly definition files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Remove bootstrap leftovers (sample images, placeholder README).
    #[arg(long = "cleanup", help = "Remove bootstrap leftovers after init")]
    pub cleanup: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,

    /// Preview what would be written without touching the project.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `upkg completions`.
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

/// Subcommands for `upkg config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.company`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from(["upkg", "init", "Widgets", "--company", "Acme"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.name.as_deref(), Some("Widgets"));
                assert_eq!(args.company.as_deref(), Some("Acme"));
                assert!(!args.no_editor);
                assert!(!args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn init_name_is_optional() {
        let cli = Cli::parse_from(["upkg", "init"]);
        match cli.command {
            Commands::Init(args) => assert!(args.name.is_none()),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn init_alias_i() {
        let cli = Cli::parse_from(["upkg", "i", "Widgets"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn no_editor_and_force_flags() {
        let cli = Cli::parse_from(["upkg", "init", "Widgets", "--no-editor", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.no_editor);
                assert!(args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["upkg", "--quiet", "--verbose", "init", "X"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_config_set() {
        let cli = Cli::parse_from(["upkg", "config", "set", "defaults.company", "Acme"]);
        match cli.command {
            Commands::Config(ConfigCommands::Set { key, value }) => {
                assert_eq!(key, "defaults.company");
                assert_eq!(value, "Acme");
            }
            other => panic!("expected config set, got {other:?}"),
        }
    }
}
