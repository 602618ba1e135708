//! Definition-file format detection.
//!
//! Two on-disk shapes exist:
//! - the current envelope `{"id": "...", "value": {...}}`
//! - the oldest bare form, where the whole file is the form value and the id
//!   is the file stem
//!
//! Files in either shape may still embed an `initial_values` mapping from the
//! era before definition and data were split; the coordinator migrates it.

use serde::Deserialize;
use serde_json::Value;

/// Which on-disk shape a definition file had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Envelope,
    Bare,
}

impl DefinitionFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Envelope => "envelope",
            Self::Bare => "bare",
        }
    }
}

/// A parsed definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub id: String,
    pub value: Value,
    pub format: DefinitionFormat,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    #[serde(default)]
    id: Option<String>,
    value: Value,
}

/// Parse definition file content, falling back to the bare shape.
///
/// An envelope without a usable id takes `stem` as its id.
///
/// # Errors
///
/// Only when the content is not JSON at all.
pub fn parse_definition(stem: &str, content: &str) -> Result<Definition, serde_json::Error> {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(content) {
        let id = envelope
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| stem.to_string());
        return Ok(Definition {
            id,
            value: envelope.value,
            format: DefinitionFormat::Envelope,
        });
    }

    let value = serde_json::from_str(content)?;
    Ok(Definition {
        id: stem.to_string(),
        value,
        format: DefinitionFormat::Bare,
    })
}
