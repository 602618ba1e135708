use std::path::Path;

use anyhow::Context;
use form_store::{DefinitionFormat, parse_definition};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SaveArgs;
use crate::commands::shared::input::read_input;
use crate::context::AppContext;
use crate::output::output;

/// Handle `formctl save`. Prints `{"created": bool, "record": {...}}`.
pub fn run(args: &SaveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args.input.as_deref();
    let text = read_input(path)?;
    let (envelope_id, value) = split_envelope(&text, path)?;

    let id = args.id.as_deref().or(envelope_id.as_deref());
    let outcome = ctx.repo.save(id, value)?;
    output(&outcome, ctx.format(flags))
}

/// Accept either a bare form value or an `{id, value}` envelope.
fn split_envelope(text: &str, path: Option<&Path>) -> anyhow::Result<(Option<String>, Value)> {
    let definition = parse_definition("", text).with_context(|| match path {
        Some(path) => format!("input file {} is not valid JSON", path.display()),
        None => "stdin is not valid JSON".to_string(),
    })?;

    Ok(match definition.format {
        DefinitionFormat::Envelope => {
            let id = Some(definition.id).filter(|id| !id.is_empty());
            (id, definition.value)
        }
        DefinitionFormat::Bare => (None, definition.value),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_value_has_no_id() {
        let (id, value) = split_envelope(r#"{"schema": {"type": "object"}}"#, None).unwrap();
        assert_eq!(id, None);
        assert_eq!(value, json!({"schema": {"type": "object"}}));
    }

    #[test]
    fn envelope_is_unwrapped() {
        let (id, value) =
            split_envelope(r#"{"id": "abc", "value": {"schema": {}}}"#, None).unwrap();
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(value, json!({"schema": {}}));
    }

    #[test]
    fn envelope_without_id_generates_one() {
        let (id, _) = split_envelope(r#"{"value": {}}"#, None).unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(split_envelope("nope", None).is_err());
    }
}
