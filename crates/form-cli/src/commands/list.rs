use form_core::Record;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RecordListResponse {
    records: Vec<Record>,
}

/// Handle `formctl list`.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.repo.list_all()?;
    output(&RecordListResponse { records }, ctx.format(flags))
}
