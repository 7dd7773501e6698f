//! Expense repository ports, fixed and variable.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::finance::{
    ExpenseMethod, FixedExpense, FixedExpenseCategory, VariableExpense, VariableExpenseCategory,
};
use crate::domain::foundation::{DomainError, FixedExpenseId, VariableExpenseId};

/// Query filter for fixed expense listings.
#[derive(Debug, Clone, Default)]
pub struct FixedExpenseFilter {
    pub active: Option<bool>,
    pub category: Option<FixedExpenseCategory>,
}

/// Repository port for fixed monthly expenses.
#[async_trait]
pub trait FixedExpenseRepository: Send + Sync {
    async fn create(&self, expense: &FixedExpense) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// `ExpenseNotFound` when the expense does not exist.
    async fn update(&self, expense: &FixedExpense) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &FixedExpenseId) -> Result<Option<FixedExpense>, DomainError>;

    /// Lists fixed expenses matching the filter, ordered by due day.
    async fn list(&self, filter: &FixedExpenseFilter) -> Result<Vec<FixedExpense>, DomainError>;
}

/// Query filter for variable expense listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct VariableExpenseFilter {
    pub category: Option<VariableExpenseCategory>,
    pub method: Option<ExpenseMethod>,
    /// Inclusive lower bound on the expense date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the expense date.
    pub to: Option<NaiveDate>,
}

/// Repository port for one-off variable expenses.
#[async_trait]
pub trait VariableExpenseRepository: Send + Sync {
    async fn create(&self, expense: &VariableExpense) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: &VariableExpenseId,
    ) -> Result<Option<VariableExpense>, DomainError>;

    /// Lists variable expenses matching the filter, newest first.
    async fn list(
        &self,
        filter: &VariableExpenseFilter,
    ) -> Result<Vec<VariableExpense>, DomainError>;
}
