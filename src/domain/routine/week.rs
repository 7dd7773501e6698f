//! Routine week.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RoutineId, ValidationError, WeekId};

/// Week position inside a routine, 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Validates a week number.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless the value is between 1 and 4.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "number",
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
}

/// One of the four weeks of a routine.
///
/// # Invariants
///
/// - `number ∈ [1, 4]`
/// - `(routine_id, number)` is unique; the repository enforces this
///   atomically at write time, excluding the record itself on update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub id: WeekId,
    pub routine_id: RoutineId,
    pub number: WeekNumber,
    pub notes: String,
}

impl Week {
    /// Creates a week for a routine.
    pub fn create(
        id: WeekId,
        routine_id: RoutineId,
        number: u8,
        notes: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            routine_id,
            number: WeekNumber::try_new(number)?,
            notes,
        })
    }

    /// Moves the week to a different position and replaces its notes.
    pub fn update(&mut self, number: u8, notes: String) -> Result<(), ValidationError> {
        self.number = WeekNumber::try_new(number)?;
        self.notes = notes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_numbers_outside_one_to_four_are_rejected() {
        assert!(WeekNumber::try_new(0).is_err());
        assert!(WeekNumber::try_new(5).is_err());
        for n in 1..=4u8 {
            assert_eq!(WeekNumber::try_new(n).unwrap().value(), n);
        }
    }

    #[test]
    fn update_revalidates_the_number() {
        let mut week = Week::create(WeekId::new(), RoutineId::new(), 1, String::new()).unwrap();
        assert!(week.update(9, String::new()).is_err());
        assert!(week.update(3, "deload".into()).is_ok());
        assert_eq!(week.number.value(), 3);
    }
}
