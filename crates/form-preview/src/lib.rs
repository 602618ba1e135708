//! # form-preview
//!
//! Read-only HTML preview of a form value.
//!
//! The renderer walks the schema tree in declaration order and dispatches on
//! each field's component: cards become titled groups, inputs, passwords,
//! textareas, number pickers and selects become labelled controls carrying
//! the current value, untagged containers are flattened into their children,
//! and everything else is shown as escaped, preformatted JSON. All text and
//! attribute content is HTML-escaped.

mod error;
mod escape;
mod renderer;
mod style;

pub use error::PreviewError;
pub use escape::escape_html;
pub use renderer::{PreviewRenderer, render};
pub use style::{camel_to_kebab, style_attr};

use serde_json::Value;
use tracing::debug;

/// Field of the preview request body that carries the form value.
pub const VALUE_FIELD: &str = "value";

/// Render the preview for a request body of the shape `{"value": ...}`.
///
/// # Errors
///
/// Returns `PreviewError::InvalidValue` if the body is not an object and
/// `PreviewError::MissingValue` if `value` is absent or null.
pub fn render_preview(body: &Value) -> Result<String, PreviewError> {
    let Some(fields) = body.as_object() else {
        return Err(PreviewError::InvalidValue(
            "request body must be a JSON object".to_string(),
        ));
    };
    let value = fields
        .get(VALUE_FIELD)
        .filter(|value| !value.is_null())
        .ok_or(PreviewError::MissingValue)?;

    let html = render(value);
    debug!(bytes = html.len(), "rendered preview");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_or_null_value_is_rejected() {
        assert!(matches!(render_preview(&json!({})), Err(PreviewError::MissingValue)));
        assert!(matches!(
            render_preview(&json!({"value": null})),
            Err(PreviewError::MissingValue)
        ));
    }

    #[test]
    fn non_object_body_is_invalid() {
        assert!(matches!(
            render_preview(&json!([1])),
            Err(PreviewError::InvalidValue(_))
        ));
    }

    #[test]
    fn scalar_value_still_renders() {
        let html = render_preview(&json!({"value": "just text"})).unwrap();
        assert!(html.contains("<pre>&quot;just text&quot;</pre>"));
    }
}
