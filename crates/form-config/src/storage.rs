//! Storage layout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_root() -> PathBuf {
    PathBuf::from(".formwork")
}

fn default_schema_dir() -> String {
    "schema".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

/// Where the two id-keyed stores live on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base directory holding both stores.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory (under `root`) for definition files.
    #[serde(default = "default_schema_dir")]
    pub schema_dir: String,

    /// Directory (under `root`) for data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            schema_dir: default_schema_dir(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// A default layout rooted somewhere else.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn schema_path(&self) -> PathBuf {
        self.root.join(&self.schema_dir)
    }

    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    /// Check that the two stores resolve to distinct, non-empty directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dir_name("storage.schema_dir", &self.schema_dir)?;
        check_dir_name("storage.data_dir", &self.data_dir)?;
        if Path::new(self.schema_dir.trim()) == Path::new(self.data_dir.trim()) {
            return Err(ConfigError::invalid(
                "storage.data_dir",
                format!("must differ from schema_dir ('{}')", self.schema_dir),
            ));
        }
        Ok(())
    }
}

fn check_dir_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn paths_join_root() {
        let config = StorageConfig::with_root("/srv/forms");
        assert_eq!(config.schema_path(), PathBuf::from("/srv/forms/schema"));
        assert_eq!(config.data_path(), PathBuf::from("/srv/forms/data"));
    }

    #[rstest]
    #[case("", "data", "storage.schema_dir")]
    #[case("schema", "  ", "storage.data_dir")]
    #[case("same", "same", "storage.data_dir")]
    fn invalid_layouts_are_rejected(
        #[case] schema_dir: &str,
        #[case] data_dir: &str,
        #[case] expected_field: &str,
    ) {
        let config = StorageConfig {
            schema_dir: schema_dir.to_string(),
            data_dir: data_dir.to_string(),
            ..StorageConfig::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
