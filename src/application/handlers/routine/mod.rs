//! Routine use cases: the exercise catalog, routine lifecycle, and the
//! four-week schedule hierarchy.

mod catalog;
mod routines;
mod schedule;

pub use catalog::{
    CreateCatalogEntryCommand, CreateCatalogEntryHandler, DeleteCatalogEntryHandler,
    ListCatalogHandler, UpdateCatalogEntryCommand, UpdateCatalogEntryHandler,
};
pub use routines::{
    CreateRoutineCommand, CreateRoutineHandler, GetRoutineHandler, GetRoutineQuery,
    GetRoutineSummaryHandler, ListRoutinesHandler, ListRoutinesQuery, SetRoutineActiveHandler,
};
pub use schedule::{
    AddExerciseCommand, AddExerciseHandler, AddTrainingDayCommand, AddTrainingDayHandler,
    AddWeekCommand, AddWeekHandler, RemoveExerciseHandler, UpdateExerciseCommand,
    UpdateExerciseHandler, UpdateTrainingDayCommand, UpdateTrainingDayHandler, UpdateWeekCommand,
    UpdateWeekHandler,
};
