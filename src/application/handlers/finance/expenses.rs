//! Expense use cases: fixed monthly obligations and one-off spends.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::views::{
    month_total_view, monthly_obligations_view, MonthlyObligationsView, PeriodTotalView,
};
use crate::domain::finance::{
    ExpenseMethod, FixedExpense, FixedExpenseCategory, VariableExpense, VariableExpenseCategory,
};
use crate::domain::foundation::{Amount, DomainError, ErrorCode, FixedExpenseId, VariableExpenseId};
use crate::ports::{
    FixedExpenseFilter, FixedExpenseRepository, VariableExpenseFilter, VariableExpenseRepository,
};

use super::payments::month_bounds;

/// Command to create a fixed monthly expense.
#[derive(Debug, Clone)]
pub struct CreateFixedExpenseCommand {
    pub name: String,
    pub category: FixedExpenseCategory,
    pub monthly_amount_cents: i64,
    pub due_day: u32,
    pub notes: String,
}

/// Handler for creating fixed expenses.
pub struct CreateFixedExpenseHandler {
    fixed: Arc<dyn FixedExpenseRepository>,
}

impl CreateFixedExpenseHandler {
    pub fn new(fixed: Arc<dyn FixedExpenseRepository>) -> Self {
        Self { fixed }
    }

    pub async fn handle(&self, cmd: CreateFixedExpenseCommand) -> Result<FixedExpense, DomainError> {
        let expense = FixedExpense::create(
            FixedExpenseId::new(),
            cmd.name,
            cmd.category,
            cmd.monthly_amount_cents,
            cmd.due_day,
            cmd.notes,
        )?;
        self.fixed.create(&expense).await?;
        tracing::info!(expense_id = %expense.id, "fixed expense created");
        Ok(expense)
    }
}

/// Handler for stopping or resuming a fixed obligation.
pub struct SetFixedExpenseActiveHandler {
    fixed: Arc<dyn FixedExpenseRepository>,
}

impl SetFixedExpenseActiveHandler {
    pub fn new(fixed: Arc<dyn FixedExpenseRepository>) -> Self {
        Self { fixed }
    }

    pub async fn handle(&self, id: FixedExpenseId, active: bool) -> Result<FixedExpense, DomainError> {
        let mut expense = self
            .fixed
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ExpenseNotFound, "Expense not found"))?;
        if active {
            expense.activate();
        } else {
            expense.deactivate();
        }
        self.fixed.update(&expense).await?;
        Ok(expense)
    }
}

/// Handler for fixed expense listings.
pub struct ListFixedExpensesHandler {
    fixed: Arc<dyn FixedExpenseRepository>,
}

impl ListFixedExpensesHandler {
    pub fn new(fixed: Arc<dyn FixedExpenseRepository>) -> Self {
        Self { fixed }
    }

    pub async fn handle(
        &self,
        filter: FixedExpenseFilter,
    ) -> Result<Vec<FixedExpense>, DomainError> {
        self.fixed.list(&filter).await
    }

    /// Active obligations whose due day falls within the next seven
    /// calendar days, wrapping across month end.
    pub async fn due_soon(&self, today: NaiveDate) -> Result<Vec<FixedExpense>, DomainError> {
        let active = self
            .fixed
            .list(&FixedExpenseFilter {
                active: Some(true),
                ..Default::default()
            })
            .await?;
        Ok(active.into_iter().filter(|e| e.due_soon(today)).collect())
    }
}

/// Handler for the total of all active fixed monthly obligations.
pub struct MonthlyObligationsHandler {
    fixed: Arc<dyn FixedExpenseRepository>,
}

impl MonthlyObligationsHandler {
    pub fn new(fixed: Arc<dyn FixedExpenseRepository>) -> Self {
        Self { fixed }
    }

    pub async fn handle(&self) -> Result<MonthlyObligationsView, DomainError> {
        let active = self
            .fixed
            .list(&FixedExpenseFilter {
                active: Some(true),
                ..Default::default()
            })
            .await?;
        let total: Amount = active.iter().map(|e| e.monthly_amount).sum();
        Ok(monthly_obligations_view(total))
    }
}

/// Command to record a one-off variable expense.
#[derive(Debug, Clone)]
pub struct RecordVariableExpenseCommand {
    pub spent_on: NaiveDate,
    pub category: VariableExpenseCategory,
    pub description: String,
    pub amount_cents: i64,
    pub method: ExpenseMethod,
    pub supplier: String,
    pub receipt: String,
    pub notes: String,
}

/// Handler for recording variable expenses.
pub struct RecordVariableExpenseHandler {
    variable: Arc<dyn VariableExpenseRepository>,
}

impl RecordVariableExpenseHandler {
    pub fn new(variable: Arc<dyn VariableExpenseRepository>) -> Self {
        Self { variable }
    }

    pub async fn handle(
        &self,
        cmd: RecordVariableExpenseCommand,
    ) -> Result<VariableExpense, DomainError> {
        let expense = VariableExpense::record(
            VariableExpenseId::new(),
            cmd.spent_on,
            cmd.category,
            cmd.description,
            cmd.amount_cents,
            cmd.method,
            cmd.supplier,
            cmd.receipt,
            cmd.notes,
        )?;
        self.variable.create(&expense).await?;
        tracing::info!(expense_id = %expense.id, amount = expense.amount.as_cents(), "variable expense recorded");
        Ok(expense)
    }
}

/// Handler for variable expense listings and the current-month total.
pub struct ListVariableExpensesHandler {
    variable: Arc<dyn VariableExpenseRepository>,
}

impl ListVariableExpensesHandler {
    pub fn new(variable: Arc<dyn VariableExpenseRepository>) -> Self {
        Self { variable }
    }

    pub async fn handle(
        &self,
        filter: VariableExpenseFilter,
    ) -> Result<Vec<VariableExpense>, DomainError> {
        self.variable.list(&filter).await
    }

    /// Spend total for the month `today` falls in; zero when empty.
    pub async fn month_total(&self, today: NaiveDate) -> Result<PeriodTotalView, DomainError> {
        let (from, to) = month_bounds(today);
        let expenses = self
            .variable
            .list(&VariableExpenseFilter {
                from: Some(from),
                to: Some(to),
                ..Default::default()
            })
            .await?;
        let total: Amount = expenses.iter().map(|e| e.amount).sum();
        Ok(month_total_view(today, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryFixedExpenseStore, InMemoryVariableExpenseStore};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn fixed_store_with(
        entries: &[(&str, u32, i64, bool)],
    ) -> Arc<InMemoryFixedExpenseStore> {
        let store = Arc::new(InMemoryFixedExpenseStore::new());
        for (name, due_day, cents, active) in entries {
            let mut expense = FixedExpense::create(
                FixedExpenseId::new(),
                (*name).into(),
                FixedExpenseCategory::Other,
                *cents,
                *due_day,
                String::new(),
            )
            .unwrap();
            if !active {
                expense.deactivate();
            }
            store.create(&expense).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn monthly_obligations_sum_active_only() {
        let store = fixed_store_with(&[
            ("Rent", 5, 800_000, true),
            ("Internet", 10, 25_000, true),
            ("Old alarm", 15, 40_000, false),
        ])
        .await;

        let view = MonthlyObligationsHandler::new(store).handle().await.unwrap();
        assert_eq!(view.total_cents, 825_000);
    }

    #[tokio::test]
    async fn due_soon_wraps_across_month_end() {
        // On Jan 28, a bill due on the 2nd is within seven days.
        let store = fixed_store_with(&[("Rent", 2, 800_000, true), ("Taxes", 20, 90_000, true)])
            .await;

        let due = ListFixedExpensesHandler::new(store)
            .due_soon(date(2024, 1, 28))
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].name, "Rent");
    }

    #[tokio::test]
    async fn variable_month_total_filters_by_date() {
        let store = Arc::new(InMemoryVariableExpenseStore::new());
        let record = RecordVariableExpenseHandler::new(store.clone());

        for (spent_on, cents) in [(date(2024, 4, 3), 30_000), (date(2024, 5, 1), 70_000)] {
            record
                .handle(RecordVariableExpenseCommand {
                    spent_on,
                    category: VariableExpenseCategory::Supplies,
                    description: "Chalk".into(),
                    amount_cents: cents,
                    method: ExpenseMethod::Cash,
                    supplier: String::new(),
                    receipt: String::new(),
                    notes: String::new(),
                })
                .await
                .unwrap();
        }

        let view = ListVariableExpensesHandler::new(store)
            .month_total(date(2024, 4, 20))
            .await
            .unwrap();
        assert_eq!(view.total_cents, 30_000);
        assert_eq!(view.period, "April 2024");
    }
}
