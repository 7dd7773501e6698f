//! Routine domain: the exercise catalog and the four-week
//! routine → week → day → assignment hierarchy with its derived
//! progress and state computations.

mod aggregate;
mod assignment;
mod catalog;
mod day;
mod progress;
mod week;

pub use aggregate::{default_end_date, Routine, MAX_START_DAYS_IN_PAST, ROUTINE_LENGTH_DAYS};
pub use assignment::{ExerciseAssignment, SetKind, DEFAULT_SETS};
pub use catalog::{ExerciseCatalogEntry, ExerciseCategory, MuscleGroup};
pub use day::{TrainingDay, Weekday};
pub use progress::{progress_percent, RoutineState};
pub use week::{Week, WeekNumber};
