//! Shared value objects and error types for the domain layer.

pub mod calendar;
mod errors;
mod ids;
mod money;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AccountStatusId, AssignmentId, CatalogEntryId, ClientId, FingerprintId, FixedExpenseId,
    MembershipId, PaymentId, PlanId, ReminderId, RoutineId, TrainingDayId, VariableExpenseId,
    WeekId,
};
pub use money::Amount;
