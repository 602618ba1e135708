//! Borrowed views over a component-tagged schema tree.
//!
//! A schema is plain JSON:
//!
//! ```text
//! { "type": "object",
//!   "properties": {
//!     "profile": { "x-component": "Card", "properties": { "name": { ... } } },
//!     "level":   { "x-component": "Select", "enum": [{"label": "A", "value": "a"}] } } }
//! ```
//!
//! A node with a `properties` object is a container; anything else is a leaf.
//! `properties` keeps declaration order (serde_json `preserve_order`), which
//! drives both render and fill order.

use serde_json::{Map, Value};

use crate::enums::{Component, TypeHint};

/// Key of the nested schema tree inside a form value.
pub const SCHEMA_KEY: &str = "schema";
const PROPERTIES_KEY: &str = "properties";
const TITLE_KEY: &str = "title";
const TYPE_KEY: &str = "type";
const ENUM_KEY: &str = "enum";
const STYLE_KEY: &str = "style";
const PANES_KEY: &str = "panes";

/// Component tag keys, most specific first.
const COMPONENT_KEYS: [&str; 2] = ["x-component", "component"];
/// Component property keys, most specific first.
const COMPONENT_PROPS_KEYS: [&str; 2] = ["x-component-props", "componentProps"];

/// Resolve the schema tree of a form value.
///
/// `value.schema` when it is an object, otherwise the value itself.
#[must_use]
pub fn schema_root(value: &Value) -> &Value {
    match value.get(SCHEMA_KEY) {
        Some(schema @ Value::Object(_)) => schema,
        _ => value,
    }
}

/// Text form of a scalar: strings verbatim, numbers and booleans as JSON
/// text, everything else empty.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// A single node of the schema tree together with the key it is declared under.
#[derive(Debug, Clone, Copy)]
pub struct FieldNode<'a> {
    key: &'a str,
    raw: &'a Value,
}

impl<'a> FieldNode<'a> {
    #[must_use]
    pub const fn new(key: &'a str, raw: &'a Value) -> Self {
        Self { key, raw }
    }

    /// The tree root has no key of its own.
    #[must_use]
    pub const fn root(raw: &'a Value) -> Self {
        Self { key: "", raw }
    }

    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    #[must_use]
    pub const fn raw(&self) -> &'a Value {
        self.raw
    }

    /// The `properties` mapping, if this node is a container.
    #[must_use]
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.raw.get(PROPERTIES_KEY).and_then(Value::as_object)
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        self.properties().is_some()
    }

    /// Child nodes in declaration order. Empty for leaves.
    pub fn children(self) -> impl Iterator<Item = FieldNode<'a>> + 'a {
        self.properties()
            .into_iter()
            .flat_map(|props| props.iter().map(|(key, raw)| FieldNode::new(key, raw)))
    }

    /// Raw component tag, empty when absent or not a string.
    #[must_use]
    pub fn component_tag(&self) -> &'a str {
        COMPONENT_KEYS
            .iter()
            .find_map(|key| self.raw.get(*key).and_then(Value::as_str))
            .unwrap_or("")
    }

    #[must_use]
    pub fn component(&self) -> Component {
        Component::from_tag(self.component_tag())
    }

    /// Display label: `title` when present, otherwise the field key.
    #[must_use]
    pub fn title(&self) -> String {
        match self.raw.get(TITLE_KEY) {
            Some(Value::Null) | None => self.key.to_string(),
            Some(title) => scalar_text(title),
        }
    }

    #[must_use]
    pub fn type_hint(&self) -> Option<TypeHint> {
        self.raw
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .and_then(TypeHint::parse)
    }

    /// Declared `enum` entries: `{label, value}` objects or bare scalars.
    #[must_use]
    pub fn enum_options(&self) -> &'a [Value] {
        self.raw
            .get(ENUM_KEY)
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn component_props(&self) -> Option<&'a Map<String, Value>> {
        COMPONENT_PROPS_KEYS
            .iter()
            .find_map(|key| self.raw.get(*key).and_then(Value::as_object))
    }

    /// Text of a non-null component property such as `placeholder` or `header`.
    #[must_use]
    pub fn prop_text(&self, name: &str) -> Option<String> {
        self.component_props()
            .and_then(|props| props.get(name))
            .filter(|value| !value.is_null())
            .map(scalar_text)
    }

    /// The camelCase `style` mapping from the component properties.
    #[must_use]
    pub fn style(&self) -> Option<&'a Map<String, Value>> {
        self.component_props()
            .and_then(|props| props.get(STYLE_KEY))
            .and_then(Value::as_object)
    }

    /// Names of the declared panes of a tab-like component, in order.
    #[must_use]
    pub fn pane_names(&self) -> Vec<&'a str> {
        self.component_props()
            .and_then(|props| props.get(PANES_KEY))
            .and_then(Value::as_array)
            .map(|panes| {
                panes
                    .iter()
                    .filter_map(|pane| pane.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}
