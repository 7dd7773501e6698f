//! Routine hierarchy repository port.
//!
//! Covers the routine, its weeks, training days, and exercise
//! assignments. The two hierarchy uniqueness constraints (week number
//! per routine, weekday per week) must be enforced atomically at write
//! time; on update the record being written is excluded from its own
//! duplicate check.

use async_trait::async_trait;

use crate::domain::foundation::{
    AssignmentId, CatalogEntryId, ClientId, DomainError, RoutineId, TrainingDayId, WeekId,
};
use crate::domain::routine::{ExerciseAssignment, Routine, TrainingDay, Week};

/// Query filter for routine listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct RoutineFilter {
    pub client_id: Option<ClientId>,
    pub active: Option<bool>,
}

/// Repository port for the routine → week → day → assignment hierarchy.
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    // ── Routines ─────────────────────────────────────────────────────

    async fn create_routine(&self, routine: &Routine) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// `RoutineNotFound` when the routine does not exist.
    async fn update_routine(&self, routine: &Routine) -> Result<(), DomainError>;

    async fn find_routine(&self, id: &RoutineId) -> Result<Option<Routine>, DomainError>;

    /// Lists routines matching the filter, newest start date first.
    async fn list_routines(&self, filter: &RoutineFilter) -> Result<Vec<Routine>, DomainError>;

    // ── Weeks ────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// - `RoutineNotFound` when the parent routine does not exist
    /// - `DuplicateKey` when the routine already has a week with this
    ///   number
    async fn create_week(&self, week: &Week) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `WeekNotFound` when the week does not exist
    /// - `DuplicateKey` when another week of the same routine already has
    ///   this number
    async fn update_week(&self, week: &Week) -> Result<(), DomainError>;

    async fn find_week(&self, id: &WeekId) -> Result<Option<Week>, DomainError>;

    /// Weeks of a routine ordered by number.
    async fn list_weeks(&self, routine_id: &RoutineId) -> Result<Vec<Week>, DomainError>;

    // ── Training days ────────────────────────────────────────────────

    /// # Errors
    ///
    /// - `WeekNotFound` when the parent week does not exist
    /// - `DuplicateKey` when the week already has a day on this weekday
    async fn create_day(&self, day: &TrainingDay) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `TrainingDayNotFound` when the day does not exist
    /// - `DuplicateKey` when another day of the same week already sits on
    ///   this weekday
    async fn update_day(&self, day: &TrainingDay) -> Result<(), DomainError>;

    async fn find_day(&self, id: &TrainingDayId) -> Result<Option<TrainingDay>, DomainError>;

    /// Days of a week ordered by weekday.
    async fn list_days(&self, week_id: &WeekId) -> Result<Vec<TrainingDay>, DomainError>;

    // ── Exercise assignments ─────────────────────────────────────────

    /// # Errors
    ///
    /// `TrainingDayNotFound` when the parent day does not exist.
    async fn create_assignment(&self, assignment: &ExerciseAssignment)
        -> Result<(), DomainError>;

    async fn update_assignment(&self, assignment: &ExerciseAssignment)
        -> Result<(), DomainError>;

    async fn find_assignment(
        &self,
        id: &AssignmentId,
    ) -> Result<Option<ExerciseAssignment>, DomainError>;

    /// Assignments of a day in execution order.
    async fn list_assignments(
        &self,
        day_id: &TrainingDayId,
    ) -> Result<Vec<ExerciseAssignment>, DomainError>;

    /// Removes one assignment from its day.
    async fn delete_assignment(&self, id: &AssignmentId) -> Result<(), DomainError>;

    /// How many assignments across all routines reference a catalog
    /// entry. Backs the protect-on-delete check.
    async fn assignment_count_for_exercise(
        &self,
        exercise_id: &CatalogEntryId,
    ) -> Result<usize, DomainError>;
}
