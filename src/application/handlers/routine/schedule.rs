//! Schedule-building use cases: weeks, training days, and exercise
//! assignments. Uniqueness inside the hierarchy is enforced by the
//! repository at write time.

use std::sync::Arc;

use crate::domain::foundation::{
    AssignmentId, CatalogEntryId, DomainError, ErrorCode, RoutineId, TrainingDayId, WeekId,
};
use crate::domain::routine::{ExerciseAssignment, SetKind, TrainingDay, Week};
use crate::ports::{ExerciseCatalogRepository, RoutineRepository};

use super::super::shared::{require_routine, require_week};

/// Command to add a week to a routine.
#[derive(Debug, Clone)]
pub struct AddWeekCommand {
    pub routine_id: RoutineId,
    pub number: u8,
    pub notes: String,
}

/// Handler for adding weeks.
pub struct AddWeekHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl AddWeekHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, cmd: AddWeekCommand) -> Result<Week, DomainError> {
        let routine = require_routine(self.routines.as_ref(), &cmd.routine_id).await?;
        let week = Week::create(WeekId::new(), routine.id, cmd.number, cmd.notes)?;
        self.routines.create_week(&week).await?;
        Ok(week)
    }
}

/// Command to reposition a week or replace its notes.
#[derive(Debug, Clone)]
pub struct UpdateWeekCommand {
    pub id: WeekId,
    pub number: u8,
    pub notes: String,
}

/// Handler for week updates. Moving a week onto a number already taken
/// by a sibling fails; keeping its own number does not.
pub struct UpdateWeekHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl UpdateWeekHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, cmd: UpdateWeekCommand) -> Result<Week, DomainError> {
        let mut week = require_week(self.routines.as_ref(), &cmd.id).await?;
        week.update(cmd.number, cmd.notes)?;
        self.routines.update_week(&week).await?;
        Ok(week)
    }
}

/// Command to add a training day to a week.
#[derive(Debug, Clone)]
pub struct AddTrainingDayCommand {
    pub week_id: WeekId,
    pub weekday: u8,
    pub name: String,
    pub notes: String,
}

/// Handler for adding training days.
pub struct AddTrainingDayHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl AddTrainingDayHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, cmd: AddTrainingDayCommand) -> Result<TrainingDay, DomainError> {
        let week = require_week(self.routines.as_ref(), &cmd.week_id).await?;
        let day =
            TrainingDay::create(TrainingDayId::new(), week.id, cmd.weekday, cmd.name, cmd.notes)?;
        self.routines.create_day(&day).await?;
        Ok(day)
    }
}

/// Command to move a training day or rename it.
#[derive(Debug, Clone)]
pub struct UpdateTrainingDayCommand {
    pub id: TrainingDayId,
    pub weekday: u8,
    pub name: String,
    pub notes: String,
}

/// Handler for training day updates.
pub struct UpdateTrainingDayHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl UpdateTrainingDayHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, cmd: UpdateTrainingDayCommand) -> Result<TrainingDay, DomainError> {
        let mut day = self.routines.find_day(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::TrainingDayNotFound, "Training day not found")
        })?;
        day.update(cmd.weekday, cmd.name, cmd.notes)?;
        self.routines.update_day(&day).await?;
        Ok(day)
    }
}

/// Command to program a catalog exercise into a training day.
#[derive(Debug, Clone)]
pub struct AddExerciseCommand {
    pub day_id: TrainingDayId,
    pub exercise_id: CatalogEntryId,
    pub order: u32,
    /// Defaults to three when absent.
    pub sets: Option<u32>,
    pub reps: String,
    pub rest: String,
    pub set_kind: SetKind,
    pub notes: String,
}

/// Handler for adding exercise assignments. The catalog entry must
/// exist; assignments reference entries, they never own them.
pub struct AddExerciseHandler {
    routines: Arc<dyn RoutineRepository>,
    catalog: Arc<dyn ExerciseCatalogRepository>,
}

impl AddExerciseHandler {
    pub fn new(
        routines: Arc<dyn RoutineRepository>,
        catalog: Arc<dyn ExerciseCatalogRepository>,
    ) -> Self {
        Self { routines, catalog }
    }

    pub async fn handle(&self, cmd: AddExerciseCommand) -> Result<ExerciseAssignment, DomainError> {
        let day = self.routines.find_day(&cmd.day_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::TrainingDayNotFound, "Training day not found")
        })?;
        let entry = self
            .catalog
            .find_by_id(&cmd.exercise_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CatalogEntryNotFound, "Catalog entry not found")
            })?;

        let assignment = ExerciseAssignment::create(
            AssignmentId::new(),
            day.id,
            entry.id,
            cmd.order,
            cmd.sets,
            cmd.reps,
            cmd.rest,
            cmd.set_kind,
            cmd.notes,
        )?;
        self.routines.create_assignment(&assignment).await?;
        Ok(assignment)
    }
}

/// Command to change an assignment's prescription.
#[derive(Debug, Clone)]
pub struct UpdateExerciseCommand {
    pub id: AssignmentId,
    pub order: u32,
    pub sets: Option<u32>,
    pub reps: String,
    pub rest: String,
    pub set_kind: SetKind,
    pub notes: String,
}

/// Handler for assignment updates.
pub struct UpdateExerciseHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl UpdateExerciseHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, cmd: UpdateExerciseCommand) -> Result<ExerciseAssignment, DomainError> {
        let mut assignment = self
            .routines
            .find_assignment(&cmd.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AssignmentNotFound, "Assignment not found")
            })?;
        assignment.update(cmd.order, cmd.sets, cmd.reps, cmd.rest, cmd.set_kind, cmd.notes)?;
        self.routines.update_assignment(&assignment).await?;
        Ok(assignment)
    }
}

/// Handler for removing an assignment from its day.
pub struct RemoveExerciseHandler {
    routines: Arc<dyn RoutineRepository>,
}

impl RemoveExerciseHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>) -> Self {
        Self { routines }
    }

    pub async fn handle(&self, id: AssignmentId) -> Result<(), DomainError> {
        self.routines.delete_assignment(&id).await
    }
}
