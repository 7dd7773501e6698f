//! Training day within a routine week.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TrainingDayId, ValidationError, WeekId};

/// Day of the week, 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weekday(u8);

impl Weekday {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Validates a weekday number.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless the value is between 1 and 7.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weekday",
                Self::MIN as i64,
                Self::MAX as i64,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Human display label; never stored.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Sunday",
        }
    }
}

/// A scheduled training day inside a week.
///
/// # Invariants
///
/// - `weekday ∈ [1, 7]`
/// - `(week_id, weekday)` is unique; enforced by the repository at write
///   time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    pub id: TrainingDayId,
    pub week_id: WeekId,
    pub weekday: Weekday,
    /// E.g. "Leg day", "Upper body".
    pub name: String,
    pub notes: String,
}

impl TrainingDay {
    /// Creates a training day in a week.
    pub fn create(
        id: TrainingDayId,
        week_id: WeekId,
        weekday: u8,
        name: String,
        notes: String,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            week_id,
            weekday: Weekday::try_new(weekday)?,
            name,
            notes,
        })
    }

    /// Moves the day to a different weekday and replaces its labels.
    pub fn update(&mut self, weekday: u8, name: String, notes: String) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        self.weekday = Weekday::try_new(weekday)?;
        self.name = name;
        self.notes = notes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_range_is_one_to_seven() {
        assert!(Weekday::try_new(0).is_err());
        assert!(Weekday::try_new(8).is_err());
        assert_eq!(Weekday::try_new(1).unwrap().label(), "Monday");
        assert_eq!(Weekday::try_new(7).unwrap().label(), "Sunday");
    }

    #[test]
    fn blank_day_name_is_rejected() {
        let result = TrainingDay::create(
            TrainingDayId::new(),
            WeekId::new(),
            3,
            String::new(),
            String::new(),
        );
        assert!(result.is_err());
    }
}
