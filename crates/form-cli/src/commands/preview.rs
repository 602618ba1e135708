use form_store::FormRepository;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PreviewArgs;
use crate::commands::shared::input::{parse_json, read_input};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PreviewResponse {
    html: String,
}

/// Handle `formctl preview`. Input is the request body `{"value": ...}`.
pub fn run(args: &PreviewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args.input.as_deref();
    let body = parse_json(&read_input(path)?, path)?;
    let html = FormRepository::render_preview(&body)?;

    if args.html {
        println!("{html}");
        return Ok(());
    }
    output(&PreviewResponse { html }, ctx.format(flags))
}
