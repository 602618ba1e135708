//! # form-core
//!
//! Core types, ID generation, and error types for formwork.
//!
//! This crate provides the foundational types shared across all formwork crates:
//! - `FieldNode`, a borrowed view over one node of a component-tagged schema tree
//! - `Component` and `TypeHint` tags with explicit fallbacks for unknown input
//! - The `Record` envelope (`{id, value}`) and helpers for its values mapping
//! - Record ID generation and validation
//! - Cross-cutting error types
//!
//! The schema tree itself stays a `serde_json::Value`. Whether a node is a
//! container or a leaf is decided structurally (a `properties` object), never
//! by a declared discriminant.

pub mod enums;
pub mod errors;
pub mod ids;
pub mod record;
pub mod schema;

pub use enums::{Component, TypeHint};
pub use errors::CoreError;
pub use record::Record;
pub use schema::FieldNode;
