//! Exercise catalog use cases.

use std::sync::Arc;

use crate::domain::foundation::{CatalogEntryId, DomainError, ErrorCode};
use crate::domain::routine::{ExerciseCatalogEntry, ExerciseCategory, MuscleGroup};
use crate::ports::{CatalogFilter, ExerciseCatalogRepository, RoutineRepository};

/// Command to add a movement to the exercise catalog.
#[derive(Debug, Clone)]
pub struct CreateCatalogEntryCommand {
    pub name: String,
    pub description: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
}

/// Handler for creating catalog entries.
pub struct CreateCatalogEntryHandler {
    catalog: Arc<dyn ExerciseCatalogRepository>,
}

impl CreateCatalogEntryHandler {
    pub fn new(catalog: Arc<dyn ExerciseCatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: CreateCatalogEntryCommand,
    ) -> Result<ExerciseCatalogEntry, DomainError> {
        let entry = ExerciseCatalogEntry::create(
            CatalogEntryId::new(),
            cmd.name,
            cmd.description,
            cmd.category,
            cmd.muscle_group,
        )?;
        self.catalog.create(&entry).await?;
        tracing::info!(entry_id = %entry.id, "catalog entry created");
        Ok(entry)
    }
}

/// Command to update a catalog entry.
#[derive(Debug, Clone)]
pub struct UpdateCatalogEntryCommand {
    pub id: CatalogEntryId,
    pub name: String,
    pub description: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
}

/// Handler for updating catalog entries.
pub struct UpdateCatalogEntryHandler {
    catalog: Arc<dyn ExerciseCatalogRepository>,
}

impl UpdateCatalogEntryHandler {
    pub fn new(catalog: Arc<dyn ExerciseCatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCatalogEntryCommand,
    ) -> Result<ExerciseCatalogEntry, DomainError> {
        let mut entry = self.catalog.find_by_id(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::CatalogEntryNotFound, "Catalog entry not found")
        })?;
        entry.update(cmd.name, cmd.description, cmd.category, cmd.muscle_group)?;
        self.catalog.update(&entry).await?;
        Ok(entry)
    }
}

/// Handler for listing catalog entries.
pub struct ListCatalogHandler {
    catalog: Arc<dyn ExerciseCatalogRepository>,
}

impl ListCatalogHandler {
    pub fn new(catalog: Arc<dyn ExerciseCatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        filter: CatalogFilter,
    ) -> Result<Vec<ExerciseCatalogEntry>, DomainError> {
        self.catalog.list(&filter).await
    }
}

/// Handler for deleting a catalog entry.
///
/// Deletion is refused while any assignment in any routine still
/// references the entry; the caller deactivates instead.
pub struct DeleteCatalogEntryHandler {
    catalog: Arc<dyn ExerciseCatalogRepository>,
    routines: Arc<dyn RoutineRepository>,
}

impl DeleteCatalogEntryHandler {
    pub fn new(
        catalog: Arc<dyn ExerciseCatalogRepository>,
        routines: Arc<dyn RoutineRepository>,
    ) -> Self {
        Self { catalog, routines }
    }

    #[tracing::instrument(skip(self), fields(entry_id = %id))]
    pub async fn handle(&self, id: CatalogEntryId) -> Result<(), DomainError> {
        let entry = self.catalog.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::CatalogEntryNotFound, "Catalog entry not found")
        })?;

        let references = self.routines.assignment_count_for_exercise(&id).await?;
        if references > 0 {
            return Err(DomainError::new(
                ErrorCode::ReferencedInUse,
                format!(
                    "Exercise '{}' is used by {} assignment(s)",
                    entry.name, references
                ),
            )
            .with_detail("references", references.to_string()));
        }

        self.catalog.delete(&id).await?;
        tracing::info!("catalog entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalogStore, InMemoryRoutineStore};
    use crate::domain::foundation::{AssignmentId, ClientId, RoutineId, TrainingDayId, WeekId};
    use crate::domain::routine::{ExerciseAssignment, Routine, SetKind, TrainingDay, Week};
    use chrono::NaiveDate;

    fn entry_cmd(name: &str) -> CreateCatalogEntryCommand {
        CreateCatalogEntryCommand {
            name: name.into(),
            description: String::new(),
            category: ExerciseCategory::Strength,
            muscle_group: MuscleGroup::Legs,
        }
    }

    #[tokio::test]
    async fn unreferenced_entry_can_be_deleted() {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        let routines = Arc::new(InMemoryRoutineStore::new());

        let entry = CreateCatalogEntryHandler::new(catalog.clone())
            .handle(entry_cmd("Back squat"))
            .await
            .unwrap();

        DeleteCatalogEntryHandler::new(catalog.clone(), routines)
            .handle(entry.id)
            .await
            .unwrap();
        assert!(catalog.find_by_id(&entry.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn referenced_entry_cannot_be_deleted() {
        let catalog = Arc::new(InMemoryCatalogStore::new());
        let routines = Arc::new(InMemoryRoutineStore::new());

        let entry = CreateCatalogEntryHandler::new(catalog.clone())
            .handle(entry_cmd("Deadlift"))
            .await
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let routine = Routine::create(
            RoutineId::new(),
            ClientId::new(),
            "Block".into(),
            "strength".into(),
            today,
            None,
            String::new(),
            today,
        )
        .unwrap();
        routines.create_routine(&routine).await.unwrap();
        let week = Week::create(WeekId::new(), routine.id, 1, String::new()).unwrap();
        routines.create_week(&week).await.unwrap();
        let day =
            TrainingDay::create(TrainingDayId::new(), week.id, 1, "Pull".into(), String::new())
                .unwrap();
        routines.create_day(&day).await.unwrap();
        let assignment = ExerciseAssignment::create(
            AssignmentId::new(),
            day.id,
            entry.id,
            1,
            Some(5),
            "5".into(),
            "3min".into(),
            SetKind::Normal,
            String::new(),
        )
        .unwrap();
        routines.create_assignment(&assignment).await.unwrap();

        let err = DeleteCatalogEntryHandler::new(catalog.clone(), routines)
            .handle(entry.id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReferencedInUse);
        assert!(catalog.find_by_id(&entry.id).await.unwrap().is_some());
    }
}
