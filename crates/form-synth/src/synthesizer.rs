//! Depth-first fill of a form's values mapping.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use form_core::record::{INITIAL_VALUES_KEY, normalize_values_key};
use form_core::schema::schema_root;
use form_core::{Component, FieldNode};
use rand::distr::Alphanumeric;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::{Map, Value};
use tracing::debug;

use crate::policy::{LeafPolicy, enum_entry_value};

/// Length of the random suffix of text placeholders.
const PLACEHOLDER_SUFFIX_LEN: usize = 6;
/// Temporal values land in `[now, now + 29 days]`.
const TEMPORAL_SPREAD_DAYS: i64 = 30;
/// Numeric values land in `[1, 100]`.
const NUMERIC_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Whether a values-mapping entry may be replaced.
///
/// Absent, null, and blank strings are fillable. Zero, `false`, non-blank
/// strings, arrays and objects count as supplied.
#[must_use]
pub fn needs_fill(current: Option<&Value>) -> bool {
    match current {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Fills unset leaf values of a schema tree with plausible placeholders.
///
/// Generic over the random source so tests can run with a seeded `StdRng`.
#[derive(Debug)]
pub struct ValueSynthesizer<R> {
    rng: R,
    now: Option<DateTime<Utc>>,
}

impl ValueSynthesizer<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for ValueSynthesizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ValueSynthesizer<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng, now: None }
    }

    /// Pin "now" for temporal values instead of reading the clock per field.
    #[must_use]
    pub const fn anchored_at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Fill `values` from the schema tree at `root`. Returns how many entries
    /// were written.
    pub fn fill(&mut self, root: &Value, values: &mut Map<String, Value>) -> usize {
        if root.is_null() {
            return 0;
        }
        self.fill_children(FieldNode::root(root), values)
    }

    /// Fill the values mapping embedded in a whole form value, in place.
    ///
    /// Normalizes an `initialValues` alias, replaces a non-object mapping with
    /// an empty one, then fills against [`schema_root`]. Non-object values are
    /// left untouched.
    pub fn populate(&mut self, value: &mut Value) -> usize {
        if !value.is_object() {
            return 0;
        }
        normalize_values_key(value);

        let mut values = match value.get_mut(INITIAL_VALUES_KEY).map(Value::take) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let filled = self.fill(schema_root(value), &mut values);

        if let Value::Object(map) = value {
            map.insert(INITIAL_VALUES_KEY.to_string(), Value::Object(values));
        }
        debug!(filled, "populated initial values");
        filled
    }

    /// Placeholder value for one leaf, ignoring any current value.
    pub fn synthesize(&mut self, node: &FieldNode<'_>) -> Value {
        match LeafPolicy::for_node(node) {
            LeafPolicy::Enumerated(options) => options
                .choose(&mut self.rng)
                .map_or(Value::Null, enum_entry_value),
            LeafPolicy::Boolean => Value::Bool(self.rng.random_bool(0.5)),
            LeafPolicy::Numeric => Value::from(self.rng.random_range(NUMERIC_RANGE)),
            LeafPolicy::Temporal => Value::String(self.timestamp()),
            LeafPolicy::Placeholder => Value::String(self.placeholder(node.key())),
        }
    }

    fn fill_children(&mut self, node: FieldNode<'_>, values: &mut Map<String, Value>) -> usize {
        node.children()
            .map(|child| self.fill_field(child, values))
            .sum()
    }

    fn fill_field(&mut self, node: FieldNode<'_>, values: &mut Map<String, Value>) -> usize {
        if node.raw().is_null() {
            return 0;
        }

        if node.is_container() {
            let mut filled = 0;
            if node.component() == Component::Tabs && needs_fill(values.get(node.key())) {
                let pane = self.pick_pane(&node);
                values.insert(node.key().to_string(), Value::String(pane));
                filled += 1;
            }
            return filled + self.fill_children(node, values);
        }

        if !needs_fill(values.get(node.key())) {
            return 0;
        }
        let value = self.synthesize(&node);
        values.insert(node.key().to_string(), value);
        1
    }

    /// A random declared pane name, or empty when none are declared.
    fn pick_pane(&mut self, node: &FieldNode<'_>) -> String {
        node.pane_names()
            .choose(&mut self.rng)
            .map_or_else(String::new, |name| (*name).to_string())
    }

    fn timestamp(&mut self) -> String {
        let now = self.now.unwrap_or_else(Utc::now);
        let offset = TimeDelta::days(self.rng.random_range(0..TEMPORAL_SPREAD_DAYS));
        (now + offset).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn placeholder(&mut self, key: &str) -> String {
        let suffix: String = (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(PLACEHOLDER_SUFFIX_LEN)
            .map(char::from)
            .collect();
        format!("{key}_{suffix}")
    }
}
