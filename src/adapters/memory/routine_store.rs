//! In-memory stores for the routine hierarchy and the exercise catalog.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{
    AssignmentId, CatalogEntryId, DomainError, ErrorCode, RoutineId, TrainingDayId, WeekId,
};
use crate::domain::routine::{ExerciseAssignment, ExerciseCatalogEntry, Routine, TrainingDay, Week};
use crate::ports::{
    CatalogFilter, ExerciseCatalogRepository, RoutineFilter, RoutineRepository,
};

use super::{read_table, write_table};

/// Exercise catalog table ordered by name on read.
#[derive(Default)]
pub struct InMemoryCatalogStore {
    table: RwLock<Vec<ExerciseCatalogEntry>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseCatalogRepository for InMemoryCatalogStore {
    async fn create(&self, entry: &ExerciseCatalogEntry) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &ExerciseCatalogEntry) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table.iter_mut().find(|e| e.id == entry.id).ok_or_else(|| {
            DomainError::new(ErrorCode::CatalogEntryNotFound, "Catalog entry not found")
        })?;
        *slot = entry.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CatalogEntryId,
    ) -> Result<Option<ExerciseCatalogEntry>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|e| e.id == *id).cloned())
    }

    async fn list(&self, filter: &CatalogFilter) -> Result<Vec<ExerciseCatalogEntry>, DomainError> {
        let table = read_table(&self.table)?;
        let mut entries: Vec<ExerciseCatalogEntry> = table
            .iter()
            .filter(|e| filter.active.map_or(true, |a| e.active == a))
            .filter(|e| filter.category.map_or(true, |c| e.category == c))
            .filter(|e| filter.muscle_group.map_or(true, |g| e.muscle_group == g))
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn delete(&self, id: &CatalogEntryId) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let before = table.len();
        table.retain(|e| e.id != *id);
        if table.len() == before {
            return Err(DomainError::new(
                ErrorCode::CatalogEntryNotFound,
                "Catalog entry not found",
            ));
        }
        Ok(())
    }
}

/// Routine hierarchy tables. Kept behind one lock so the week-number and
/// weekday uniqueness checks see a consistent snapshot.
#[derive(Default)]
struct RoutineTables {
    routines: Vec<Routine>,
    weeks: Vec<Week>,
    days: Vec<TrainingDay>,
    assignments: Vec<ExerciseAssignment>,
}

#[derive(Default)]
pub struct InMemoryRoutineStore {
    tables: RwLock<RoutineTables>,
}

impl InMemoryRoutineStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn week_number_taken(tables: &RoutineTables, week: &Week, exclude: Option<&WeekId>) -> bool {
        tables.weeks.iter().any(|w| {
            Some(&w.id) != exclude && w.routine_id == week.routine_id && w.number == week.number
        })
    }

    fn weekday_taken(tables: &RoutineTables, day: &TrainingDay, exclude: Option<&TrainingDayId>) -> bool {
        tables.days.iter().any(|d| {
            Some(&d.id) != exclude && d.week_id == day.week_id && d.weekday == day.weekday
        })
    }
}

#[async_trait]
impl RoutineRepository for InMemoryRoutineStore {
    async fn create_routine(&self, routine: &Routine) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        tables.routines.push(routine.clone());
        Ok(())
    }

    async fn update_routine(&self, routine: &Routine) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        let slot = tables
            .routines
            .iter_mut()
            .find(|r| r.id == routine.id)
            .ok_or_else(|| DomainError::new(ErrorCode::RoutineNotFound, "Routine not found"))?;
        *slot = routine.clone();
        Ok(())
    }

    async fn find_routine(&self, id: &RoutineId) -> Result<Option<Routine>, DomainError> {
        let tables = read_table(&self.tables)?;
        Ok(tables.routines.iter().find(|r| r.id == *id).cloned())
    }

    async fn list_routines(&self, filter: &RoutineFilter) -> Result<Vec<Routine>, DomainError> {
        let tables = read_table(&self.tables)?;
        let mut routines: Vec<Routine> = tables
            .routines
            .iter()
            .filter(|r| filter.client_id.map_or(true, |id| r.client_id == id))
            .filter(|r| filter.active.map_or(true, |a| r.active == a))
            .cloned()
            .collect();
        routines.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(routines)
    }

    async fn create_week(&self, week: &Week) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        if !tables.routines.iter().any(|r| r.id == week.routine_id) {
            return Err(DomainError::new(ErrorCode::RoutineNotFound, "Routine not found"));
        }
        if Self::week_number_taken(&tables, week, None) {
            return Err(DomainError::duplicate(
                "number",
                format!("Routine already has a week {}", week.number.value()),
            ));
        }
        tables.weeks.push(week.clone());
        Ok(())
    }

    async fn update_week(&self, week: &Week) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        if !tables.weeks.iter().any(|w| w.id == week.id) {
            return Err(DomainError::new(ErrorCode::WeekNotFound, "Week not found"));
        }
        if Self::week_number_taken(&tables, week, Some(&week.id)) {
            return Err(DomainError::duplicate(
                "number",
                format!("Routine already has a week {}", week.number.value()),
            ));
        }
        let slot = tables.weeks.iter_mut().find(|w| w.id == week.id);
        if let Some(slot) = slot {
            *slot = week.clone();
        }
        Ok(())
    }

    async fn find_week(&self, id: &WeekId) -> Result<Option<Week>, DomainError> {
        let tables = read_table(&self.tables)?;
        Ok(tables.weeks.iter().find(|w| w.id == *id).cloned())
    }

    async fn list_weeks(&self, routine_id: &RoutineId) -> Result<Vec<Week>, DomainError> {
        let tables = read_table(&self.tables)?;
        let mut weeks: Vec<Week> = tables
            .weeks
            .iter()
            .filter(|w| w.routine_id == *routine_id)
            .cloned()
            .collect();
        weeks.sort_by_key(|w| w.number);
        Ok(weeks)
    }

    async fn create_day(&self, day: &TrainingDay) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        if !tables.weeks.iter().any(|w| w.id == day.week_id) {
            return Err(DomainError::new(ErrorCode::WeekNotFound, "Week not found"));
        }
        if Self::weekday_taken(&tables, day, None) {
            return Err(DomainError::duplicate(
                "weekday",
                format!("Week already has a day on {}", day.weekday.label()),
            ));
        }
        tables.days.push(day.clone());
        Ok(())
    }

    async fn update_day(&self, day: &TrainingDay) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        if !tables.days.iter().any(|d| d.id == day.id) {
            return Err(DomainError::new(
                ErrorCode::TrainingDayNotFound,
                "Training day not found",
            ));
        }
        if Self::weekday_taken(&tables, day, Some(&day.id)) {
            return Err(DomainError::duplicate(
                "weekday",
                format!("Week already has a day on {}", day.weekday.label()),
            ));
        }
        let slot = tables.days.iter_mut().find(|d| d.id == day.id);
        if let Some(slot) = slot {
            *slot = day.clone();
        }
        Ok(())
    }

    async fn find_day(&self, id: &TrainingDayId) -> Result<Option<TrainingDay>, DomainError> {
        let tables = read_table(&self.tables)?;
        Ok(tables.days.iter().find(|d| d.id == *id).cloned())
    }

    async fn list_days(&self, week_id: &WeekId) -> Result<Vec<TrainingDay>, DomainError> {
        let tables = read_table(&self.tables)?;
        let mut days: Vec<TrainingDay> = tables
            .days
            .iter()
            .filter(|d| d.week_id == *week_id)
            .cloned()
            .collect();
        days.sort_by_key(|d| d.weekday);
        Ok(days)
    }

    async fn create_assignment(&self, assignment: &ExerciseAssignment) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        if !tables.days.iter().any(|d| d.id == assignment.day_id) {
            return Err(DomainError::new(
                ErrorCode::TrainingDayNotFound,
                "Training day not found",
            ));
        }
        tables.assignments.push(assignment.clone());
        Ok(())
    }

    async fn update_assignment(&self, assignment: &ExerciseAssignment) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        let slot = tables
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AssignmentNotFound, "Assignment not found")
            })?;
        *slot = assignment.clone();
        Ok(())
    }

    async fn find_assignment(
        &self,
        id: &AssignmentId,
    ) -> Result<Option<ExerciseAssignment>, DomainError> {
        let tables = read_table(&self.tables)?;
        Ok(tables.assignments.iter().find(|a| a.id == *id).cloned())
    }

    async fn list_assignments(
        &self,
        day_id: &TrainingDayId,
    ) -> Result<Vec<ExerciseAssignment>, DomainError> {
        let tables = read_table(&self.tables)?;
        let mut assignments: Vec<ExerciseAssignment> = tables
            .assignments
            .iter()
            .filter(|a| a.day_id == *day_id)
            .cloned()
            .collect();
        assignments.sort_by_key(|a| a.order);
        Ok(assignments)
    }

    async fn delete_assignment(&self, id: &AssignmentId) -> Result<(), DomainError> {
        let mut tables = write_table(&self.tables)?;
        let before = tables.assignments.len();
        tables.assignments.retain(|a| a.id != *id);
        if tables.assignments.len() == before {
            return Err(DomainError::new(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            ));
        }
        Ok(())
    }

    async fn assignment_count_for_exercise(
        &self,
        exercise_id: &CatalogEntryId,
    ) -> Result<usize, DomainError> {
        let tables = read_table(&self.tables)?;
        Ok(tables
            .assignments
            .iter()
            .filter(|a| a.exercise_id == *exercise_id)
            .count())
    }
}
