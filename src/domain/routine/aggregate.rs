//! Routine aggregate entity.
//!
//! A routine is a four-week training program for one client. The week,
//! day, and assignment records live in their own tables and reference the
//! routine; aggregate counts over them are always recomputed by walking
//! the hierarchy at read time.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{calendar, ClientId, RoutineId, ValidationError};

use super::{progress_percent, RoutineState};

/// Default routine length: four weeks.
pub const ROUTINE_LENGTH_DAYS: u64 = 28;

/// How far in the past a routine may start. Exactly seven days back is
/// allowed; eight is rejected.
pub const MAX_START_DAYS_IN_PAST: i64 = 7;

/// A four-week training program owned by one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: RoutineId,
    pub client_id: ClientId,
    pub name: String,
    /// Training goal, e.g. "weight loss" or "muscle gain".
    pub objective: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: String,
    pub active: bool,
}

/// Resolves the end date when the caller did not supply one.
pub fn default_end_date(start_date: NaiveDate) -> NaiveDate {
    start_date + Days::new(ROUTINE_LENGTH_DAYS)
}

impl Routine {
    /// Creates a new active routine.
    ///
    /// When `end_date` is `None` it resolves to `start_date + 28 days`
    /// via [`default_end_date`]; the computation is explicit here, not a
    /// side effect of saving.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank name or objective
    /// - `InvalidFormat` when `start_date` is more than seven days before
    ///   `today`, or the supplied `end_date` precedes `start_date`
    pub fn create(
        id: RoutineId,
        client_id: ClientId,
        name: String,
        objective: String,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        notes: String,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if objective.trim().is_empty() {
            return Err(ValidationError::empty_field("objective"));
        }
        let days_back = (today - start_date).num_days();
        if days_back > MAX_START_DAYS_IN_PAST {
            return Err(ValidationError::invalid_format(
                "start_date",
                "cannot be more than 7 days in the past",
            ));
        }

        let end_date = end_date.unwrap_or_else(|| default_end_date(start_date));
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                "cannot be before start_date",
            ));
        }

        Ok(Self {
            id,
            client_id,
            name,
            objective,
            start_date,
            end_date,
            notes,
            active: true,
        })
    }

    /// Elapsed share of the date range at `today`, clamped to `[0, 100]`.
    pub fn progress_on(&self, today: NaiveDate) -> f64 {
        progress_percent(self.start_date, self.end_date, today)
    }

    /// Derived state label at `today`.
    pub fn state_on(&self, today: NaiveDate) -> RoutineState {
        RoutineState::derive(self.active, self.start_date, self.end_date, today)
    }

    /// Days from `today` until the routine ends, floored at zero.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        calendar::days_remaining(self.end_date, today)
    }

    /// Soft-delete: marks the routine inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Reactivates the routine.
    pub fn activate(&mut self) {
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> Result<Routine, ValidationError> {
        Routine::create(
            RoutineId::new(),
            ClientId::new(),
            "Hypertrophy block".into(),
            "muscle gain".into(),
            start,
            end,
            String::new(),
            today,
        )
    }

    #[test]
    fn end_date_defaults_to_four_weeks_after_start() {
        let routine = create(date(2024, 1, 1), None, date(2024, 1, 1)).unwrap();
        assert_eq!(routine.end_date, date(2024, 1, 29));
    }

    #[test]
    fn explicit_end_date_is_kept() {
        let routine =
            create(date(2024, 1, 1), Some(date(2024, 2, 15)), date(2024, 1, 1)).unwrap();
        assert_eq!(routine.end_date, date(2024, 2, 15));
    }

    #[test]
    fn start_seven_days_back_allowed_eight_rejected() {
        let today = date(2024, 3, 10);
        assert!(create(date(2024, 3, 3), None, today).is_ok());
        assert!(create(date(2024, 3, 2), None, today).is_err());
    }

    #[test]
    fn future_start_is_fine() {
        assert!(create(date(2024, 6, 1), None, date(2024, 3, 10)).is_ok());
    }

    #[test]
    fn blank_objective_rejected() {
        let result = Routine::create(
            RoutineId::new(),
            ClientId::new(),
            "Block".into(),
            "  ".into(),
            date(2024, 1, 1),
            None,
            String::new(),
            date(2024, 1, 1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn progress_midpoint_scenario() {
        let routine = create(date(2024, 1, 1), None, date(2024, 1, 1)).unwrap();
        assert_eq!(routine.progress_on(date(2024, 1, 15)), 50.0);
    }

    #[test]
    fn inactive_flag_drives_state_label() {
        let mut routine = create(date(2024, 1, 1), None, date(2024, 1, 1)).unwrap();
        assert_eq!(routine.state_on(date(2024, 1, 10)), RoutineState::InProgress);
        routine.deactivate();
        assert_eq!(routine.state_on(date(2024, 1, 10)), RoutineState::Inactive);
    }
}
