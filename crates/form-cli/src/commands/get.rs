use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `formctl get <id>`.
pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .repo
        .get_by_id(id)?
        .with_context(|| format!("record '{id}' not found"))?;
    output(&record, ctx.format(flags))
}
