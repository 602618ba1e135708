use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `formctl` binary.
#[derive(Debug, Parser)]
#[command(name = "formctl", version, about = "formwork - form schema storage and preview")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.pretty`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage root (overrides `storage.root`)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["formctl", "--format", "raw", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["formctl", "get", "abc", "--quiet", "--root", "/srv/forms"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.root.as_deref(), Some(Path::new("/srv/forms")));
        match cli.command {
            Commands::Get(args) => assert_eq!(args.id, "abc"),
            other => panic!("expected get, got {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["formctl", "--format", "table", "list"]).is_err());
    }

    #[test]
    fn save_and_preview_options() {
        let cli = Cli::try_parse_from(["formctl", "save", "--id", "x", "--input", "form.json"])
            .expect("cli should parse");
        match cli.command {
            Commands::Save(args) => {
                assert_eq!(args.id.as_deref(), Some("x"));
                assert_eq!(args.input.as_deref(), Some(Path::new("form.json")));
            }
            other => panic!("expected save, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["formctl", "preview", "--html"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Preview(ref args) if args.html && args.input.is_none()));
    }

    #[test]
    fn format_defers_to_pretty_setting() {
        let cli = Cli::try_parse_from(["formctl", "list"]).expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.output_format(true), OutputFormat::Json);
        assert_eq!(flags.output_format(false), OutputFormat::Raw);

        let cli = Cli::try_parse_from(["formctl", "-f", "json", "list"]).expect("cli should parse");
        assert_eq!(cli.global_flags().output_format(false), OutputFormat::Json);
    }
}
