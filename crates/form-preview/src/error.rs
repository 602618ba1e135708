//! Preview error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    /// The request carried no value, or a null one.
    #[error("Preview request is missing a value")]
    MissingValue,

    /// The request body cannot be interpreted.
    #[error("Invalid preview request: {0}")]
    InvalidValue(String),
}
