//! Finance domain: payments, expenses, and client account statuses.

mod account_status;
mod expense;
mod payment;

pub use account_status::{AccountState, AccountStatus};
pub use expense::{
    ExpenseMethod, FixedExpense, FixedExpenseCategory, VariableExpense, VariableExpenseCategory,
};
pub use payment::{Payment, PaymentConcept, PaymentMethod};
