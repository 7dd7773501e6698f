//! View models for routine read operations.
//!
//! Aggregate counts (weeks, days, exercises) are computed here by walking
//! the hierarchy the caller loaded; nothing is cached, so the numbers
//! always reflect the current records.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{
    AssignmentId, CatalogEntryId, ClientId, RoutineId, TrainingDayId, WeekId,
};
use crate::domain::routine::{
    ExerciseAssignment, ExerciseCatalogEntry, Routine, RoutineState, SetKind, TrainingDay, Week,
};

/// Row in routine listings.
#[derive(Debug, Clone, Serialize)]
pub struct RoutineListView {
    pub id: RoutineId,
    pub name: String,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub client_national_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
    pub week_count: usize,
    pub active: bool,
}

/// Builds the list row; `week_count` comes from the loaded hierarchy.
pub fn routine_list_view(
    routine: &Routine,
    client_name: Option<String>,
    client_national_id: Option<String>,
    week_count: usize,
    today: NaiveDate,
) -> RoutineListView {
    RoutineListView {
        id: routine.id,
        name: routine.name.clone(),
        client_id: routine.client_id,
        client_name,
        client_national_id,
        start_date: routine.start_date,
        end_date: routine.end_date,
        days_remaining: routine.days_remaining(today),
        week_count,
        active: routine.active,
    }
}

/// Quick summary without the nested hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct RoutineSummaryView {
    pub id: RoutineId,
    pub name: String,
    pub client_name: Option<String>,
    pub objective: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_weeks: usize,
    pub total_exercises: usize,
    pub progress: f64,
    pub state: RoutineState,
    pub state_label: &'static str,
    pub active: bool,
}

/// Builds the summary; totals come from the loaded hierarchy.
pub fn routine_summary_view(
    routine: &Routine,
    client_name: Option<String>,
    total_weeks: usize,
    total_exercises: usize,
    today: NaiveDate,
) -> RoutineSummaryView {
    let state = routine.state_on(today);
    RoutineSummaryView {
        id: routine.id,
        name: routine.name.clone(),
        client_name,
        objective: routine.objective.clone(),
        start_date: routine.start_date,
        end_date: routine.end_date,
        total_weeks,
        total_exercises,
        progress: routine.progress_on(today),
        state,
        state_label: state.label(),
        active: routine.active,
    }
}

/// Assignment row inside a day, joined with its catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    pub id: AssignmentId,
    pub exercise_id: CatalogEntryId,
    pub exercise_name: Option<String>,
    pub exercise_category: Option<String>,
    pub order: u32,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub set_kind: SetKind,
    pub set_kind_label: &'static str,
    pub prescription: String,
    pub notes: String,
}

/// Builds the assignment row; `None` for the catalog entry leaves the
/// name and category fields empty.
pub fn assignment_view(
    assignment: &ExerciseAssignment,
    exercise: Option<&ExerciseCatalogEntry>,
) -> AssignmentView {
    AssignmentView {
        id: assignment.id,
        exercise_id: assignment.exercise_id,
        exercise_name: exercise.map(|e| e.name.clone()),
        exercise_category: exercise.map(|e| e.category.label().to_string()),
        order: assignment.order,
        sets: assignment.sets,
        reps: assignment.reps.clone(),
        rest: assignment.rest.clone(),
        set_kind: assignment.set_kind,
        set_kind_label: assignment.set_kind.label(),
        prescription: assignment.prescription(),
        notes: assignment.notes.clone(),
    }
}

/// A training day with its assignments.
#[derive(Debug, Clone, Serialize)]
pub struct DayDetailView {
    pub id: TrainingDayId,
    pub weekday: u8,
    pub weekday_label: &'static str,
    pub name: String,
    pub notes: String,
    pub exercises: Vec<AssignmentView>,
}

pub fn day_detail_view(day: &TrainingDay, exercises: Vec<AssignmentView>) -> DayDetailView {
    DayDetailView {
        id: day.id,
        weekday: day.weekday.value(),
        weekday_label: day.weekday.label(),
        name: day.name.clone(),
        notes: day.notes.clone(),
        exercises,
    }
}

/// A week with its days, plus per-week aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct WeekDetailView {
    pub id: WeekId,
    pub routine_id: RoutineId,
    pub number: u8,
    pub notes: String,
    pub day_count: usize,
    pub exercise_total: usize,
    pub days: Vec<DayDetailView>,
}

pub fn week_detail_view(week: &Week, days: Vec<DayDetailView>) -> WeekDetailView {
    let exercise_total = days.iter().map(|d| d.exercises.len()).sum();
    WeekDetailView {
        id: week.id,
        routine_id: week.routine_id,
        number: week.number.value(),
        notes: week.notes.clone(),
        day_count: days.len(),
        exercise_total,
        days,
    }
}

/// Full routine detail: record fields, client info, nested weeks, and
/// every derived computation.
#[derive(Debug, Clone, Serialize)]
pub struct RoutineDetailView {
    pub id: RoutineId,
    pub name: String,
    pub objective: String,
    pub notes: String,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub client_national_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
    pub total_weeks: usize,
    pub total_days: usize,
    pub total_exercises: usize,
    pub progress: f64,
    pub state: RoutineState,
    pub state_label: &'static str,
    pub active: bool,
    pub weeks: Vec<WeekDetailView>,
}

/// Assembles the detail view from the loaded hierarchy.
pub fn routine_detail_view(
    routine: &Routine,
    client_name: Option<String>,
    client_national_id: Option<String>,
    weeks: Vec<WeekDetailView>,
    today: NaiveDate,
) -> RoutineDetailView {
    let total_days = weeks.iter().map(|w| w.day_count).sum();
    let total_exercises = weeks.iter().map(|w| w.exercise_total).sum();
    let state = routine.state_on(today);
    RoutineDetailView {
        id: routine.id,
        name: routine.name.clone(),
        objective: routine.objective.clone(),
        notes: routine.notes.clone(),
        client_id: routine.client_id,
        client_name,
        client_national_id,
        start_date: routine.start_date,
        end_date: routine.end_date,
        days_remaining: routine.days_remaining(today),
        total_weeks: weeks.len(),
        total_days,
        total_exercises,
        progress: routine.progress_on(today),
        state,
        state_label: state.label(),
        active: routine.active,
        weeks,
    }
}
