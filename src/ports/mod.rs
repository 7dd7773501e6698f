//! Ports: the record-store boundary, expressed as async repository
//! traits. Adapters provide the actual persistence.

mod account_status_repository;
mod catalog_repository;
mod client_repository;
mod expense_repository;
mod fingerprint_repository;
mod membership_repository;
mod payment_repository;
mod plan_repository;
mod reminder_repository;
mod routine_repository;

pub use account_status_repository::{AccountStatusFilter, AccountStatusRepository};
pub use catalog_repository::{CatalogFilter, ExerciseCatalogRepository};
pub use client_repository::{ClientFilter, ClientRepository};
pub use expense_repository::{
    FixedExpenseFilter, FixedExpenseRepository, VariableExpenseFilter, VariableExpenseRepository,
};
pub use fingerprint_repository::{FingerprintFilter, FingerprintRepository};
pub use membership_repository::{MembershipFilter, MembershipRepository};
pub use payment_repository::{PaymentFilter, PaymentRepository};
pub use plan_repository::{PlanFilter, PlanRepository};
pub use reminder_repository::{ReminderFilter, ReminderRepository};
pub use routine_repository::{RoutineFilter, RoutineRepository};
