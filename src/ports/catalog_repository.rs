//! Exercise catalog repository port.
//!
//! Catalog entries are the one place a hard delete exists, and it is
//! guarded: the handler checks the reference count through the routine
//! repository before calling [`ExerciseCatalogRepository::delete`].

use async_trait::async_trait;

use crate::domain::foundation::{CatalogEntryId, DomainError};
use crate::domain::routine::{ExerciseCatalogEntry, ExerciseCategory, MuscleGroup};

/// Query filter for catalog listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub active: Option<bool>,
    pub category: Option<ExerciseCategory>,
    pub muscle_group: Option<MuscleGroup>,
}

/// Repository port for exercise catalog persistence.
#[async_trait]
pub trait ExerciseCatalogRepository: Send + Sync {
    /// Persists a new catalog entry.
    async fn create(&self, entry: &ExerciseCatalogEntry) -> Result<(), DomainError>;

    /// Replaces an existing entry.
    ///
    /// # Errors
    ///
    /// `CatalogEntryNotFound` when the entry does not exist.
    async fn update(&self, entry: &ExerciseCatalogEntry) -> Result<(), DomainError>;

    /// Finds an entry by ID.
    async fn find_by_id(
        &self,
        id: &CatalogEntryId,
    ) -> Result<Option<ExerciseCatalogEntry>, DomainError>;

    /// Lists entries matching the filter, ordered by name.
    async fn list(&self, filter: &CatalogFilter) -> Result<Vec<ExerciseCatalogEntry>, DomainError>;

    /// Hard-deletes an entry. The in-use check is the caller's job.
    ///
    /// # Errors
    ///
    /// `CatalogEntryNotFound` when the entry does not exist.
    async fn delete(&self, id: &CatalogEntryId) -> Result<(), DomainError>;
}
