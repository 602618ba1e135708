use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Compact single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// Explicit `--format`; `None` defers to `general.pretty`.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub root: Option<PathBuf>,
}

impl GlobalFlags {
    /// The explicit format, or the one implied by the `pretty` setting.
    #[must_use]
    pub fn output_format(&self, pretty: bool) -> OutputFormat {
        self.format.unwrap_or(if pretty {
            OutputFormat::Json
        } else {
            OutputFormat::Raw
        })
    }
}
