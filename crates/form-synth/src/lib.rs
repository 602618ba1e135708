//! # form-synth
//!
//! Placeholder value synthesis for component-tagged form schemas.
//!
//! Walks the schema tree depth-first and writes a plausible value into the
//! flat `initial_values` mapping for every leaf whose current entry is absent,
//! null, or a blank string. Supplied values are never overwritten.
//!
//! Leaf values are chosen by [`LeafPolicy`] in a fixed order: declared enum,
//! boolean, numeric, date/time, then a `<key>_<random>` text placeholder.
//! Tab containers additionally get a randomly chosen pane name.

mod policy;
mod synthesizer;

pub use policy::{LeafPolicy, enum_entry_value};
pub use synthesizer::{ValueSynthesizer, needs_fill};

use serde_json::Value;

/// Fill the embedded values mapping of a form value using the thread RNG.
///
/// Returns the number of entries written.
pub fn populate_initial_values(value: &mut Value) -> usize {
    ValueSynthesizer::new().populate(value)
}
