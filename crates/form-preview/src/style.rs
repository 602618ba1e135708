//! Inline `style` attributes from a component's camelCase style mapping.

use serde_json::{Map, Value};

use crate::escape::escape_html;

/// `marginTop` → `margin-top`.
#[must_use]
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push('-');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render ` style='...'` for a style mapping, or an empty string when no
/// entry survives. Null and empty values are skipped; strings are used
/// verbatim, other values as JSON text.
#[must_use]
pub fn style_attr(style: Option<&Map<String, Value>>) -> String {
    let Some(style) = style else {
        return String::new();
    };

    let css: String = style
        .iter()
        .filter_map(|(name, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if text.is_empty() {
                return None;
            }
            Some(format!(
                "{}:{};",
                escape_html(&camel_to_kebab(name)),
                escape_html(&text)
            ))
        })
        .collect();

    if css.is_empty() {
        String::new()
    } else {
        format!(" style='{css}'")
    }
}
