//! Wire types for catalog and routine endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{CatalogEntryId, ClientId, TrainingDayId, WeekId};
use crate::domain::routine::{ExerciseCategory, MuscleGroup, SetKind};
use crate::ports::{CatalogFilter, RoutineFilter};

/// Body for creating or updating a catalog entry.
#[derive(Debug, Deserialize)]
pub struct CatalogEntryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ExerciseCategory,
    pub muscle_group: MuscleGroup,
}

/// Query string for catalog listings.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub active: Option<bool>,
    pub category: Option<ExerciseCategory>,
    pub muscle_group: Option<MuscleGroup>,
}

impl CatalogQuery {
    pub fn into_filter(self) -> CatalogFilter {
        CatalogFilter {
            active: self.active,
            category: self.category,
            muscle_group: self.muscle_group,
        }
    }
}

/// Body for creating a routine.
#[derive(Debug, Deserialize)]
pub struct RoutineRequest {
    pub client_id: ClientId,
    pub name: String,
    pub objective: String,
    pub start_date: NaiveDate,
    /// Defaults to four weeks after the start when omitted.
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

/// Query string for routine listings.
#[derive(Debug, Default, Deserialize)]
pub struct RoutineQuery {
    pub client_id: Option<ClientId>,
    pub active: Option<bool>,
}

impl RoutineQuery {
    pub fn into_filter(self) -> RoutineFilter {
        RoutineFilter {
            client_id: self.client_id,
            active: self.active,
        }
    }
}

/// Body for adding a week to a routine.
#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    pub number: u8,
    #[serde(default)]
    pub notes: String,
}

/// Body for adding or moving a training day.
#[derive(Debug, Deserialize)]
pub struct TrainingDayRequest {
    pub week_id: WeekId,
    pub weekday: u8,
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

/// Body for updating a training day; the parent week never changes.
#[derive(Debug, Deserialize)]
pub struct UpdateTrainingDayRequest {
    pub weekday: u8,
    pub name: String,
    #[serde(default)]
    pub notes: String,
}

/// Body for changing an assignment's prescription; the day and catalog
/// references never change.
#[derive(Debug, Deserialize)]
pub struct UpdateExerciseRequest {
    pub order: u32,
    pub sets: Option<u32>,
    pub reps: String,
    #[serde(default)]
    pub rest: String,
    #[serde(default)]
    pub set_kind: SetKind,
    #[serde(default)]
    pub notes: String,
}

/// Body for programming an exercise into a day.
#[derive(Debug, Deserialize)]
pub struct ExerciseRequest {
    pub day_id: TrainingDayId,
    pub exercise_id: CatalogEntryId,
    pub order: u32,
    /// Defaults to three when omitted.
    pub sets: Option<u32>,
    pub reps: String,
    #[serde(default)]
    pub rest: String,
    #[serde(default)]
    pub set_kind: SetKind,
    #[serde(default)]
    pub notes: String,
}
