//! # form-store
//!
//! File-backed storage for form records.
//!
//! Each record is split across two sibling directories: the definition
//! (schema tree and any other fields, never the values mapping) and the data
//! (the flat values mapping only). [`StorageCoordinator`] keeps the two in
//! step, merges them on read, and migrates older definition files:
//!
//! 1. Current `{"id", "value"}` envelopes are used as-is.
//! 2. Anything else that is JSON is a bare form value keyed by file stem.
//! 3. Values embedded in a definition seed a missing data file once.
//! 4. The data file always wins when the merged view is built.
//!
//! Writes run value synthesis first, so every write fills blank leaves.
//! [`FormRepository`] is the CRUD surface the CLI talks to.

mod coordinator;
mod definition;
mod error;
mod fs;
mod repository;

pub use coordinator::{FILE_SUFFIX, SaveOutcome, StorageCoordinator};
pub use definition::{Definition, DefinitionFormat, parse_definition};
pub use error::StoreError;
pub use fs::{FileSystem, LocalFs};
pub use repository::FormRepository;
