//! Leaf synthesis policies, tried in a fixed order.

use form_core::{FieldNode, TypeHint};
use serde_json::Value;

/// How a leaf field gets its placeholder value. First match wins:
/// enum, boolean, numeric, temporal, then the text placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafPolicy<'a> {
    /// Pick one of the declared `enum` entries.
    Enumerated(&'a [Value]),
    /// Declared `boolean`, or a toggle component.
    Boolean,
    /// Declared `number`/`integer`, or a numeric stepper.
    Numeric,
    /// Date/time picker.
    Temporal,
    /// `<key>_<6 alphanumerics>`.
    Placeholder,
}

impl<'a> LeafPolicy<'a> {
    #[must_use]
    pub fn for_node(node: &FieldNode<'a>) -> Self {
        let options = node.enum_options();
        if !options.is_empty() {
            return Self::Enumerated(options);
        }

        let component = node.component();
        let hint = node.type_hint();
        if hint == Some(TypeHint::Boolean) || component.is_toggle() {
            Self::Boolean
        } else if hint.is_some_and(TypeHint::is_numeric) || component.is_numeric() {
            Self::Numeric
        } else if component.is_temporal() {
            Self::Temporal
        } else {
            Self::Placeholder
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enumerated(_) => "enumerated",
            Self::Boolean => "boolean",
            Self::Numeric => "numeric",
            Self::Temporal => "temporal",
            Self::Placeholder => "placeholder",
        }
    }
}

/// The value an `enum` entry contributes.
///
/// `{label, value}` objects yield `value`; bare entries yield themselves.
/// Booleans, numbers (integral or floating) and strings keep their kind;
/// anything else becomes its compact JSON text. An object without a usable
/// `value` falls back to its `label`, then to its JSON text.
#[must_use]
pub fn enum_entry_value(entry: &Value) -> Value {
    let picked = match entry {
        Value::Object(map) => match map.get("value") {
            Some(value) if !value.is_null() => value,
            _ => return Value::String(entry_label(entry)),
        },
        bare => bare,
    };
    match picked {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => picked.clone(),
        other => Value::String(other.to_string()),
    }
}

fn entry_label(entry: &Value) -> String {
    match entry.get("label") {
        Some(Value::String(label)) if !label.trim().is_empty() => label.clone(),
        Some(label @ (Value::Number(_) | Value::Bool(_))) => label.to_string(),
        _ => entry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn policy_name(raw: &Value) -> &'static str {
        LeafPolicy::for_node(&FieldNode::new("field", raw)).as_str()
    }

    #[rstest]
    #[case(json!({"type": "boolean", "enum": ["a"]}), "enumerated")]
    #[case(json!({"type": "boolean"}), "boolean")]
    #[case(json!({"x-component": "Switch", "type": "string"}), "boolean")]
    #[case(json!({"type": "integer"}), "numeric")]
    #[case(json!({"x-component": "NumberPicker"}), "numeric")]
    #[case(json!({"x-component": "DateTimePicker", "type": "string"}), "temporal")]
    #[case(json!({"x-component": "DatePicker", "type": "number"}), "numeric")]
    #[case(json!({"x-component": "Input"}), "placeholder")]
    #[case(json!({"enum": []}), "placeholder")]
    #[case(json!({}), "placeholder")]
    fn policy_precedence(#[case] raw: Value, #[case] expected: &str) {
        assert_eq!(policy_name(&raw), expected);
    }

    #[rstest]
    #[case(json!({"label": "High", "value": 2}), json!(2))]
    #[case(json!({"label": "Ratio", "value": 0.5}), json!(0.5))]
    #[case(json!({"label": "On", "value": true}), json!(true))]
    #[case(json!({"label": "Code", "value": "c"}), json!("c"))]
    #[case(json!("bare"), json!("bare"))]
    #[case(json!(7), json!(7))]
    #[case(json!({"label": "Only label"}), json!("Only label"))]
    #[case(json!({"label": "Null value", "value": null}), json!("Null value"))]
    #[case(json!({"id": 1}), json!("{\"id\":1}"))]
    #[case(json!({"value": [1, 2]}), json!("[1,2]"))]
    fn enum_entry_values(#[case] entry: Value, #[case] expected: Value) {
        assert_eq!(enum_entry_value(&entry), expected);
    }
}
