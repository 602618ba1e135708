use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

/// Handle `formctl delete <id>`. An unknown id reports `deleted: false`.
pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deleted = ctx.repo.delete_by_id(id)?;
    output(&DeleteResponse { id, deleted }, ctx.format(flags))
}
