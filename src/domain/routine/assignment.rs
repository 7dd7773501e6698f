//! Exercise assignment: a catalog movement programmed into a training day.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssignmentId, CatalogEntryId, TrainingDayId, ValidationError};

/// How the sets of an assignment are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    Normal,
    Superset,
    Dropset,
    Amrap,
    Emom,
    ForTime,
}

impl Default for SetKind {
    fn default() -> Self {
        SetKind::Normal
    }
}

impl SetKind {
    pub fn label(&self) -> &'static str {
        match self {
            SetKind::Normal => "Normal",
            SetKind::Superset => "Superset",
            SetKind::Dropset => "Dropset",
            SetKind::Amrap => "AMRAP",
            SetKind::Emom => "EMOM",
            SetKind::ForTime => "For time",
        }
    }
}

/// A catalog exercise scheduled on a training day with its prescription.
///
/// The assignment references the catalog entry, it never owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseAssignment {
    pub id: AssignmentId,
    pub day_id: TrainingDayId,
    pub exercise_id: CatalogEntryId,
    /// Execution order within the day.
    pub order: u32,
    pub sets: u32,
    /// Free-form prescription: "10", "8-12", "MAX".
    pub reps: String,
    /// Free-form rest prescription: "60s", "1-2min". May be empty.
    pub rest: String,
    pub set_kind: SetKind,
    pub notes: String,
}

/// Default number of sets when the coach does not specify one.
pub const DEFAULT_SETS: u32 = 3;

impl ExerciseAssignment {
    /// Creates an assignment for a training day.
    ///
    /// The referenced catalog entry's existence is checked by the
    /// application handler before this is persisted.
    ///
    /// # Errors
    ///
    /// Rejects an empty reps prescription and zero sets.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: AssignmentId,
        day_id: TrainingDayId,
        exercise_id: CatalogEntryId,
        order: u32,
        sets: Option<u32>,
        reps: String,
        rest: String,
        set_kind: SetKind,
        notes: String,
    ) -> Result<Self, ValidationError> {
        if reps.trim().is_empty() {
            return Err(ValidationError::empty_field("reps"));
        }
        let sets = sets.unwrap_or(DEFAULT_SETS);
        if sets == 0 {
            return Err(ValidationError::out_of_range("sets", 1, i64::MAX, 0));
        }
        Ok(Self {
            id,
            day_id,
            exercise_id,
            order,
            sets,
            reps,
            rest,
            set_kind,
            notes,
        })
    }

    /// Replaces the prescription. Day and exercise references stay fixed;
    /// re-pointing an assignment means removing and re-adding it.
    ///
    /// # Errors
    ///
    /// Rejects an empty reps prescription and zero sets.
    pub fn update(
        &mut self,
        order: u32,
        sets: Option<u32>,
        reps: String,
        rest: String,
        set_kind: SetKind,
        notes: String,
    ) -> Result<(), ValidationError> {
        if reps.trim().is_empty() {
            return Err(ValidationError::empty_field("reps"));
        }
        let sets = sets.unwrap_or(DEFAULT_SETS);
        if sets == 0 {
            return Err(ValidationError::out_of_range("sets", 1, i64::MAX, 0));
        }
        self.order = order;
        self.sets = sets;
        self.reps = reps;
        self.rest = rest;
        self.set_kind = set_kind;
        self.notes = notes;
        Ok(())
    }

    /// Short display form, e.g. `3x8-12`.
    pub fn prescription(&self) -> String {
        format!("{}x{}", self.sets, self.reps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_default_to_three() {
        let a = ExerciseAssignment::create(
            AssignmentId::new(),
            TrainingDayId::new(),
            CatalogEntryId::new(),
            1,
            None,
            "8-12".into(),
            "90s".into(),
            SetKind::default(),
            String::new(),
        )
        .unwrap();
        assert_eq!(a.sets, 3);
        assert_eq!(a.prescription(), "3x8-12");
    }

    #[test]
    fn empty_reps_rejected() {
        let result = ExerciseAssignment::create(
            AssignmentId::new(),
            TrainingDayId::new(),
            CatalogEntryId::new(),
            1,
            Some(4),
            "".into(),
            String::new(),
            SetKind::Amrap,
            String::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn set_kind_tokens_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SetKind::ForTime).unwrap(),
            "\"for_time\""
        );
    }
}
