//! CRUD surface consumed by the host process.

use form_config::StorageConfig;
use form_core::Record;
use form_preview::PreviewError;
use serde_json::Value;

use crate::coordinator::{SaveOutcome, StorageCoordinator};
use crate::error::StoreError;
use crate::fs::{FileSystem, LocalFs};

/// List/get/save/delete over a [`StorageCoordinator`], plus preview rendering.
#[derive(Debug)]
pub struct FormRepository<F = LocalFs> {
    store: StorageCoordinator<F>,
}

impl FormRepository<LocalFs> {
    /// # Errors
    ///
    /// Returns `StoreError::DirectoryInit` if the storage directories cannot
    /// be created.
    pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
        StorageCoordinator::open(config).map(Self::new)
    }

    /// Render a preview request body `{"value": ...}` to HTML.
    ///
    /// # Errors
    ///
    /// Returns `PreviewError::MissingValue` when `value` is absent or null.
    pub fn render_preview(body: &Value) -> Result<String, PreviewError> {
        form_preview::render_preview(body)
    }
}

impl<F: FileSystem> FormRepository<F> {
    #[must_use]
    pub const fn new(store: StorageCoordinator<F>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// See [`StorageCoordinator::list_all`].
    pub fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        self.store.list_all()
    }

    /// # Errors
    ///
    /// See [`StorageCoordinator::get_by_id`].
    pub fn get_by_id(&self, id: &str) -> Result<Option<Record>, StoreError> {
        self.store.get_by_id(id)
    }

    /// Upsert, reporting whether the record was created or updated.
    ///
    /// # Errors
    ///
    /// See [`StorageCoordinator::upsert`].
    pub fn save(&self, id: Option<&str>, value: Value) -> Result<SaveOutcome, StoreError> {
        let outcome = self.store.upsert(id, value)?;
        tracing::debug!(
            id = %outcome.record.id,
            created = outcome.created,
            "saved record"
        );
        Ok(outcome)
    }

    /// # Errors
    ///
    /// See [`StorageCoordinator::delete_by_id`].
    pub fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete_by_id(id)
    }
}
