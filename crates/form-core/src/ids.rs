//! Record ID generation and validation.
//!
//! Generated IDs are opaque 32-char lowercase hex tokens (16 random bytes).
//! Collisions are treated as negligible; there is no retry.
//!
//! Client-supplied IDs become file stems (`<id>.json`), so anything that could
//! escape the storage directory is rejected.

use crate::errors::CoreError;

/// Number of random bytes behind a generated ID.
const ID_BYTES: usize = 16;

/// Generate a fresh record ID, e.g. `"9f86d081884c7d659a2feaa0c55ad015"`.
///
/// # Errors
///
/// Returns `CoreError::Entropy` if the OS random source is unavailable.
pub fn generate_record_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Entropy(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Trim a client-supplied ID. Blank or absent IDs mean "generate one".
#[must_use]
pub fn normalize_id(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|id| !id.is_empty())
}

/// Check that `id` is safe to use as a file stem.
///
/// # Errors
///
/// Returns `CoreError::InvalidId` for empty IDs, path separators, the `.`
/// and `..` segments, or control characters.
pub fn validate_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::invalid_id(id, "id is empty"));
    }
    if id.contains(['/', '\\']) {
        return Err(CoreError::invalid_id(id, "id contains a path separator"));
    }
    if id == "." || id == ".." {
        return Err(CoreError::invalid_id(id, "id contains a relative path segment"));
    }
    if id.chars().any(char::is_control) {
        return Err(CoreError::invalid_id(id, "id contains control characters"));
    }
    Ok(())
}
