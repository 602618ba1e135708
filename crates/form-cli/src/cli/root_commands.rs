use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every stored record.
    List,
    /// Show one record with its current values.
    Get(GetArgs),
    /// Create or replace a record from a form value.
    Save(SaveArgs),
    /// Delete a record and its values.
    Delete(DeleteArgs),
    /// Render a read-only HTML preview of a form value.
    Preview(PreviewArgs),
    /// Print the JSON Schema of the record envelope.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Record ID.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    /// Record ID to create or replace (generated when omitted).
    #[arg(long)]
    pub id: Option<String>,

    /// JSON file holding the form value or an `{id, value}` envelope (stdin when omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Record ID.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct PreviewArgs {
    /// JSON file holding the request body `{"value": ...}` (stdin when omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print bare HTML instead of `{"html": ...}`.
    #[arg(long)]
    pub html: bool,
}
