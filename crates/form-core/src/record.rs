//! The `{id, value}` record envelope and its values mapping.
//!
//! A form value carries the schema tree plus a flat `initial_values` mapping
//! (field key → scalar). On disk the two halves are split; callers always see
//! them merged in one `Record`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the flat values mapping inside a form value.
pub const INITIAL_VALUES_KEY: &str = "initial_values";
/// camelCase spelling accepted on input and normalized to [`INITIAL_VALUES_KEY`].
pub const INITIAL_VALUES_ALIAS: &str = "initialValues";

/// A stored form: its ID and the merged form value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Record {
    pub id: String,
    /// Schema tree and any other definition fields, plus `initial_values`.
    pub value: Value,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// The merged values mapping, if the value carries one.
    #[must_use]
    pub fn initial_values(&self) -> Option<&Map<String, Value>> {
        self.value
            .get(INITIAL_VALUES_KEY)
            .and_then(Value::as_object)
    }

    /// The definition half: the value with the values mapping removed.
    #[must_use]
    pub fn definition(&self) -> Value {
        strip_initial_values(&self.value)
    }
}

/// Rename a camelCase `initialValues` key to `initial_values`.
///
/// The renamed entry keeps the alias's position among the other keys. When
/// both spellings are present the snake_case one wins and the alias is
/// dropped. Non-object values are left untouched.
pub fn normalize_values_key(value: &mut Value) {
    let Value::Object(map) = value else {
        return;
    };
    if !map.contains_key(INITIAL_VALUES_ALIAS) {
        return;
    }
    let keep_alias = !map.contains_key(INITIAL_VALUES_KEY);
    *map = std::mem::take(map)
        .into_iter()
        .filter_map(|(key, entry)| {
            if key == INITIAL_VALUES_ALIAS {
                keep_alias.then(|| (INITIAL_VALUES_KEY.to_string(), entry))
            } else {
                Some((key, entry))
            }
        })
        .collect();
}

/// Copy of `value` without any values-mapping key (either spelling).
#[must_use]
pub fn strip_initial_values(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !is_values_key(key))
                .map(|(key, v)| (key.clone(), v.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// The embedded values mapping of a form value, when non-null.
#[must_use]
pub fn embedded_values(value: &Value) -> Option<&Value> {
    value
        .get(INITIAL_VALUES_KEY)
        .or_else(|| value.get(INITIAL_VALUES_ALIAS))
        .filter(|values| !values.is_null())
}

fn is_values_key(key: &str) -> bool {
    key == INITIAL_VALUES_KEY || key == INITIAL_VALUES_ALIAS
}
