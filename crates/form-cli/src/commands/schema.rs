use form_core::Record;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `formctl schema`. Needs no storage.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for!(Record), flags.output_format(true))
}
