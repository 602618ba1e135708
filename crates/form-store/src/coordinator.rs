//! Split definition/data storage with a merged read view.
//!
//! Every record id owns two files, `<schema_dir>/<id>.json` holding
//! `{"id", "value"}` without the values mapping, and `<data_dir>/<id>.json`
//! holding only the flat values mapping. Reads merge the two; writes split
//! them. Writes are two independent file operations, last writer wins.

use std::path::{Path, PathBuf};

use form_config::StorageConfig;
use form_core::Record;
use form_core::ids::{generate_record_id, normalize_id, validate_id};
use form_core::record::{
    INITIAL_VALUES_KEY, embedded_values, normalize_values_key, strip_initial_values,
};
use form_synth::populate_initial_values;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::definition::{DefinitionFormat, parse_definition};
use crate::error::StoreError;
use crate::fs::{FileSystem, LocalFs};

/// Suffix of every stored file.
pub const FILE_SUFFIX: &str = ".json";

/// Result of an upsert: the merged record and whether it was newly created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    pub created: bool,
    pub record: Record,
}

/// Owns the definition and data stores.
#[derive(Debug)]
pub struct StorageCoordinator<F = LocalFs> {
    fs: F,
    schema_dir: PathBuf,
    data_dir: PathBuf,
}

impl StorageCoordinator<LocalFs> {
    /// Open the stores described by `config` on the local file system.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryInit` if either directory cannot be created.
    pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        Self::with_fs(LocalFs, config.schema_path(), config.data_path())
    }
}

impl<F: FileSystem> StorageCoordinator<F> {
    /// Create both base directories and take ownership of them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryInit` if either directory cannot be created.
    pub fn with_fs(
        fs: F,
        schema_dir: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        let schema_dir = schema_dir.into();
        let data_dir = data_dir.into();
        for dir in [&schema_dir, &data_dir] {
            fs.create_dir_all(dir)
                .map_err(|source| StoreError::DirectoryInit {
                    path: dir.clone(),
                    source,
                })?;
        }
        tracing::debug!(
            schema_dir = %schema_dir.display(),
            data_dir = %data_dir.display(),
            "storage directories ready"
        );
        Ok(Self {
            fs,
            schema_dir,
            data_dir,
        })
    }

    #[must_use]
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn definition_path(&self, id: &str) -> PathBuf {
        self.schema_dir.join(format!("{id}{FILE_SUFFIX}"))
    }

    #[must_use]
    pub fn data_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}{FILE_SUFFIX}"))
    }

    // -----------------------------------------------------------------------
    // Read path
    // -----------------------------------------------------------------------

    /// Every stored record, ordered by file name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be listed or any
    /// definition file fails to load.
    pub fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let files = self
            .fs
            .list_files(&self.schema_dir, FILE_SUFFIX)
            .map_err(StoreError::io(&self.schema_dir))?;

        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let Some(stem) = file_stem(&path) else {
                tracing::warn!(path = %path.display(), "skipping definition file with non-UTF-8 name");
                continue;
            };
            records.push(self.load(&path, stem)?);
        }
        Ok(records)
    }

    /// The merged record for `id`, or `None` if no definition file exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` for an unsafe id, or an I/O or JSON error
    /// from loading the files.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        validate_id(id)?;
        let path = self.definition_path(id);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.load(&path, id).map(Some)
    }

    /// Load one definition file, migrate it if needed, and attach its values.
    fn load(&self, path: &Path, stem: &str) -> Result<Record, StoreError> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(StoreError::io(path))?;
        let definition = parse_definition(stem, &content).map_err(StoreError::json(path))?;
        if definition.format == DefinitionFormat::Bare {
            tracing::debug!(id = %definition.id, "read legacy bare definition file");
        }

        let id = definition.id;
        validate_id(&id).map_err(|error| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        let mut value = definition.value;
        if value.is_object() {
            self.ensure_data_file(&id, &value)?;
            self.attach_values(&id, &mut value)?;
        }
        Ok(Record::new(id, value))
    }

    /// Create the data half of a pair when it is missing, from the values
    /// embedded in the definition or else as an empty mapping.
    fn ensure_data_file(&self, id: &str, value: &Value) -> Result<(), StoreError> {
        if self.fs.exists(&self.data_path(id)) {
            return Ok(());
        }
        match embedded_values(value) {
            Some(Value::Object(values)) => {
                self.save_data(id, values)?;
                tracing::info!(id, fields = values.len(), "migrated embedded initial values to data file");
            }
            Some(other) => {
                tracing::warn!(id, kind = json_kind(other), "ignoring non-object embedded initial values");
                self.save_data(id, &Map::new())?;
            }
            None => {
                tracing::debug!(id, "creating empty data file for definition");
                self.save_data(id, &Map::new())?;
            }
        }
        Ok(())
    }

    /// Replace the value's values mapping with the data file content.
    ///
    /// A data file that is not a mapping attaches an empty one so the rest
    /// of a listing stays readable.
    fn attach_values(&self, id: &str, value: &mut Value) -> Result<(), StoreError> {
        let values = match self.get_data(id) {
            Ok(values) => values.unwrap_or_default(),
            Err(StoreError::Corrupt { path, reason }) => {
                tracing::warn!(id, path = %path.display(), %reason, "attaching empty values for unreadable data file");
                Map::new()
            }
            Err(error) => return Err(error),
        };
        normalize_values_key(value);
        if let Value::Object(map) = value {
            map.insert(INITIAL_VALUES_KEY.to_string(), Value::Object(values));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Write path
    // -----------------------------------------------------------------------

    /// Store `value` under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if id generation or either write fails.
    pub fn create(&self, value: Value) -> Result<Record, StoreError> {
        let id = generate_record_id()?;
        tracing::debug!(%id, "creating record");
        self.write_record(id, value)
    }

    /// Replace an existing record. `None` (and no write) if `id` is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for an unsafe id or a failed write.
    pub fn update(&self, id: &str, value: Value) -> Result<Option<Record>, StoreError> {
        validate_id(id)?;
        if !self.fs.exists(&self.definition_path(id)) {
            return Ok(None);
        }
        self.write_record(id.to_string(), value).map(Some)
    }

    /// Create or replace. A blank or absent id generates one; an unknown
    /// client id is created as given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for an unsafe id or a failed write.
    pub fn upsert(&self, id: Option<&str>, value: Value) -> Result<SaveOutcome, StoreError> {
        let Some(id) = normalize_id(id) else {
            return Ok(SaveOutcome {
                created: true,
                record: self.create(value)?,
            });
        };
        validate_id(id)?;
        let created = !self.fs.exists(&self.definition_path(id));
        let record = self.write_record(id.to_string(), value)?;
        Ok(SaveOutcome { created, record })
    }

    /// Fill blanks, then persist the values mapping and the stripped
    /// definition as two independent writes.
    fn write_record(&self, id: String, mut value: Value) -> Result<Record, StoreError> {
        normalize_values_key(&mut value);
        if value.is_object() {
            populate_initial_values(&mut value);
        }

        if let Some(Value::Object(values)) = embedded_values(&value) {
            self.save_data(&id, values)?;
        }

        let path = self.definition_path(&id);
        let definition = Record::new(id, strip_initial_values(&value));
        self.write_json(&path, &definition)?;
        tracing::debug!(id = %definition.id, "wrote definition file");

        Ok(Record::new(definition.id, value))
    }

    /// Remove both halves. `true` iff the definition file existed.
    ///
    /// Removing the data half is best-effort and never affects the result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for an unsafe id or a failed definition removal.
    pub fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        validate_id(id)?;
        let path = self.definition_path(id);
        let removed = self
            .fs
            .remove_file(&path)
            .map_err(StoreError::io(&path))?;

        if let Err(error) = self.delete_data(id) {
            tracing::warn!(%error, id, "failed to delete paired data file");
        }
        if removed {
            tracing::info!(id, "deleted record");
        }
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Data half
    // -----------------------------------------------------------------------

    /// The stored values mapping for `id`, or `None` if there is no data file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the file holds something other than
    /// a JSON object. Merged reads tolerate that case; this accessor does not.
    pub fn get_data(&self, id: &str) -> Result<Option<Map<String, Value>>, StoreError> {
        validate_id(id)?;
        let path = self.data_path(id);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(StoreError::io(&path))?;
        let parsed: Value = serde_json::from_str(&content).map_err(StoreError::json(&path))?;
        match parsed {
            Value::Object(values) => Ok(Some(values)),
            other => Err(StoreError::Corrupt {
                path,
                reason: format!("expected a values object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Replace the data file for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for an unsafe id or a failed write.
    pub fn save_data(&self, id: &str, values: &Map<String, Value>) -> Result<(), StoreError> {
        validate_id(id)?;
        self.write_json(&self.data_path(id), values)?;
        tracing::debug!(id, fields = values.len(), "wrote data file");
        Ok(())
    }

    /// Remove the data file for `id`. `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` for an unsafe id or a failed removal.
    pub fn delete_data(&self, id: &str) -> Result<bool, StoreError> {
        validate_id(id)?;
        let path = self.data_path(id);
        self.fs.remove_file(&path).map_err(StoreError::io(&path))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, payload: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(payload).map_err(StoreError::json(path))?;
        self.fs.write(path, &json).map_err(StoreError::io(path))
    }
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.strip_suffix(FILE_SUFFIX)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    /// Local file system whose removals in one directory always fail.
    struct StubbornDataDir {
        blocked: PathBuf,
    }

    impl FileSystem for StubbornDataDir {
        fn exists(&self, path: &Path) -> bool {
            LocalFs.exists(path)
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            LocalFs.create_dir_all(path)
        }

        fn list_files(&self, dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
            LocalFs.list_files(dir, suffix)
        }

        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            LocalFs.read_to_string(path)
        }

        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            LocalFs.write(path, contents)
        }

        fn remove_file(&self, path: &Path) -> io::Result<bool> {
            if path.starts_with(&self.blocked) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            LocalFs.remove_file(path)
        }
    }

    #[test]
    fn failed_data_removal_does_not_affect_delete_result() {
        let tmp = TempDir::new().expect("tempdir should create");
        let data_dir = tmp.path().join("data");
        let store = StorageCoordinator::with_fs(
            StubbornDataDir {
                blocked: data_dir.clone(),
            },
            tmp.path().join("schema"),
            &data_dir,
        )
        .unwrap();

        store
            .upsert(Some("pair"), json!({"schema": {"properties": {}}}))
            .unwrap();
        assert!(store.data_path("pair").exists());

        assert!(store.delete_by_id("pair").unwrap());
        assert!(!store.definition_path("pair").exists());
        assert!(store.data_path("pair").exists());
    }

    #[test]
    fn paths_are_id_keyed() {
        let tmp = TempDir::new().expect("tempdir should create");
        let store =
            StorageCoordinator::with_fs(LocalFs, tmp.path().join("s"), tmp.path().join("d")).unwrap();
        assert_eq!(store.definition_path("abc"), tmp.path().join("s").join("abc.json"));
        assert_eq!(store.data_path("abc"), tmp.path().join("d").join("abc.json"));
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!("s")), "string");
    }
}
