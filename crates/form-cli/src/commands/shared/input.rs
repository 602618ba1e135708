use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the whole input document from `path`, or from stdin when absent.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Parse input text as JSON, naming where it came from on failure.
pub fn parse_json(text: &str, path: Option<&Path>) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(text).with_context(|| match path {
        Some(path) => format!("input file {} is not valid JSON", path.display()),
        None => "stdin is not valid JSON".to_string(),
    })
}
