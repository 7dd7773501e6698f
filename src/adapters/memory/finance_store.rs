//! In-memory stores for payments, expenses, and account statuses.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::finance::{AccountStatus, FixedExpense, Payment, VariableExpense};
use crate::domain::foundation::{
    AccountStatusId, ClientId, DomainError, ErrorCode, FixedExpenseId, PaymentId,
    VariableExpenseId,
};
use crate::ports::{
    AccountStatusFilter, AccountStatusRepository, FixedExpenseFilter, FixedExpenseRepository,
    PaymentFilter, PaymentRepository, VariableExpenseFilter, VariableExpenseRepository,
};

use super::{read_table, write_table};

/// Payment table, append-only.
#[derive(Default)]
pub struct InMemoryPaymentStore {
    table: RwLock<Vec<Payment>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentStore {
    async fn create(&self, payment: &Payment) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(payment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|p| p.id == *id).cloned())
    }

    async fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, DomainError> {
        let table = read_table(&self.table)?;
        let mut payments: Vec<Payment> = table
            .iter()
            .filter(|p| filter.client_id.map_or(true, |id| p.client_id == id))
            .filter(|p| {
                filter
                    .membership_id
                    .map_or(true, |id| p.membership_id == Some(id))
            })
            .filter(|p| filter.method.map_or(true, |m| p.method == m))
            .filter(|p| filter.concept.map_or(true, |c| p.concept == c))
            .filter(|p| filter.from.map_or(true, |d| p.paid_on >= d))
            .filter(|p| filter.to.map_or(true, |d| p.paid_on <= d))
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.paid_on.cmp(&a.paid_on));
        Ok(payments)
    }
}

/// Fixed expense table ordered by due day on read.
#[derive(Default)]
pub struct InMemoryFixedExpenseStore {
    table: RwLock<Vec<FixedExpense>>,
}

impl InMemoryFixedExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FixedExpenseRepository for InMemoryFixedExpenseStore {
    async fn create(&self, expense: &FixedExpense) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(expense.clone());
        Ok(())
    }

    async fn update(&self, expense: &FixedExpense) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| DomainError::new(ErrorCode::ExpenseNotFound, "Expense not found"))?;
        *slot = expense.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &FixedExpenseId) -> Result<Option<FixedExpense>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|e| e.id == *id).cloned())
    }

    async fn list(&self, filter: &FixedExpenseFilter) -> Result<Vec<FixedExpense>, DomainError> {
        let table = read_table(&self.table)?;
        let mut expenses: Vec<FixedExpense> = table
            .iter()
            .filter(|e| filter.active.map_or(true, |a| e.active == a))
            .filter(|e| filter.category.map_or(true, |c| e.category == c))
            .cloned()
            .collect();
        expenses.sort_by_key(|e| e.due_day);
        Ok(expenses)
    }
}

/// Variable expense table, append-only.
#[derive(Default)]
pub struct InMemoryVariableExpenseStore {
    table: RwLock<Vec<VariableExpense>>,
}

impl InMemoryVariableExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VariableExpenseRepository for InMemoryVariableExpenseStore {
    async fn create(&self, expense: &VariableExpense) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(expense.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &VariableExpenseId,
    ) -> Result<Option<VariableExpense>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|e| e.id == *id).cloned())
    }

    async fn list(
        &self,
        filter: &VariableExpenseFilter,
    ) -> Result<Vec<VariableExpense>, DomainError> {
        let table = read_table(&self.table)?;
        let mut expenses: Vec<VariableExpense> = table
            .iter()
            .filter(|e| filter.category.map_or(true, |c| e.category == c))
            .filter(|e| filter.method.map_or(true, |m| e.method == m))
            .filter(|e| filter.from.map_or(true, |d| e.spent_on >= d))
            .filter(|e| filter.to.map_or(true, |d| e.spent_on <= d))
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.spent_on.cmp(&a.spent_on));
        Ok(expenses)
    }
}

/// Account status table, one record per client.
#[derive(Default)]
pub struct InMemoryAccountStatusStore {
    table: RwLock<Vec<AccountStatus>>,
}

impl InMemoryAccountStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStatusRepository for InMemoryAccountStatusStore {
    async fn create(&self, status: &AccountStatus) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        if table.iter().any(|s| s.client_id == status.client_id) {
            return Err(DomainError::duplicate(
                "client_id",
                "Client already has an account status",
            ));
        }
        table.push(status.clone());
        Ok(())
    }

    async fn update(&self, status: &AccountStatus) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|s| s.id == status.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::AccountStatusNotFound, "Account status not found")
            })?;
        *slot = status.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountStatusId) -> Result<Option<AccountStatus>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|s| s.id == *id).cloned())
    }

    async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<AccountStatus>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|s| s.client_id == *client_id).cloned())
    }

    async fn list(&self, filter: &AccountStatusFilter) -> Result<Vec<AccountStatus>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table
            .iter()
            .filter(|s| filter.state.map_or(true, |state| s.state == state))
            .filter(|s| filter.client_id.map_or(true, |id| s.client_id == id))
            .cloned()
            .collect())
    }

    async fn list_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AccountStatus>, DomainError> {
        let table = read_table(&self.table)?;
        let mut statuses: Vec<AccountStatus> = table
            .iter()
            .filter(|s| s.next_due_on.map_or(false, |d| d >= from && d <= to))
            .cloned()
            .collect();
        statuses.sort_by_key(|s| s.next_due_on);
        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finance::{PaymentConcept, PaymentMethod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn payments_come_back_newest_first() {
        let store = InMemoryPaymentStore::new();
        for paid_on in [date(2024, 1, 5), date(2024, 3, 5), date(2024, 2, 5)] {
            let p = Payment::record(
                PaymentId::new(),
                ClientId::new(),
                None,
                paid_on,
                10_000,
                PaymentMethod::Cash,
                PaymentConcept::Other,
                String::new(),
            )
            .unwrap();
            store.create(&p).await.unwrap();
        }
        let payments = store.list(&PaymentFilter::default()).await.unwrap();
        let dates: Vec<NaiveDate> = payments.iter().map(|p| p.paid_on).collect();
        assert_eq!(dates, vec![date(2024, 3, 5), date(2024, 2, 5), date(2024, 1, 5)]);
    }

    #[tokio::test]
    async fn date_bounds_are_inclusive() {
        let store = InMemoryPaymentStore::new();
        for paid_on in [date(2024, 3, 1), date(2024, 3, 31), date(2024, 4, 1)] {
            let p = Payment::record(
                PaymentId::new(),
                ClientId::new(),
                None,
                paid_on,
                10_000,
                PaymentMethod::Cash,
                PaymentConcept::Other,
                String::new(),
            )
            .unwrap();
            store.create(&p).await.unwrap();
        }
        let hits = store
            .list(&PaymentFilter {
                from: Some(date(2024, 3, 1)),
                to: Some(date(2024, 3, 31)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }
}
