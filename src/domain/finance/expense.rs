//! Gym expense records: fixed monthly obligations and one-off variable
//! expenses. Both are standalone, not owned by any client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    calendar, Amount, FixedExpenseId, ValidationError, VariableExpenseId,
};

/// Category of a recurring monthly obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedExpenseCategory {
    Rent,
    Utilities,
    Internet,
    Salaries,
    Taxes,
    Insurance,
    Cleaning,
    Other,
}

/// Category of a one-off expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableExpenseCategory {
    Equipment,
    Maintenance,
    Repairs,
    Supplies,
    Marketing,
    Supplements,
    ProfessionalServices,
    Other,
}

/// Settlement method for an expense (no payment gateway here either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseMethod {
    Cash,
    Transfer,
    DebitCard,
    CreditCard,
}

/// A recurring monthly obligation with a due day of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: FixedExpenseId,
    pub name: String,
    pub category: FixedExpenseCategory,
    /// Monthly amount in integer cents; strictly positive.
    pub monthly_amount: Amount,
    /// Day of the month the bill is due, 1 through 31.
    pub due_day: u32,
    pub active: bool,
    pub notes: String,
}

impl FixedExpense {
    /// Creates a fixed expense.
    ///
    /// # Errors
    ///
    /// Rejects a blank name, non-positive amount, or a due day outside
    /// `[1, 31]`.
    pub fn create(
        id: FixedExpenseId,
        name: String,
        category: FixedExpenseCategory,
        monthly_amount_cents: i64,
        due_day: u32,
        notes: String,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(1..=31).contains(&due_day) {
            return Err(ValidationError::out_of_range("due_day", 1, 31, due_day as i64));
        }
        Ok(Self {
            id,
            name,
            category,
            monthly_amount: Amount::positive("monthly_amount", monthly_amount_cents)?,
            due_day,
            active: true,
            notes,
        })
    }

    /// Whether the bill is due within the next seven calendar days,
    /// wrapping across month end.
    pub fn due_soon(&self, today: NaiveDate) -> bool {
        calendar::due_day_soon(self.due_day, today)
    }

    /// Stops the obligation without deleting its history.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }
}

/// A one-off expense: equipment, repairs, supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableExpense {
    pub id: VariableExpenseId,
    pub spent_on: NaiveDate,
    pub category: VariableExpenseCategory,
    pub description: String,
    /// Amount in integer cents; strictly positive.
    pub amount: Amount,
    pub method: ExpenseMethod,
    pub supplier: String,
    /// Invoice or receipt reference.
    pub receipt: String,
    pub notes: String,
}

impl VariableExpense {
    /// Records a variable expense.
    ///
    /// # Errors
    ///
    /// Rejects a blank description or non-positive amount.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        id: VariableExpenseId,
        spent_on: NaiveDate,
        category: VariableExpenseCategory,
        description: String,
        amount_cents: i64,
        method: ExpenseMethod,
        supplier: String,
        receipt: String,
        notes: String,
    ) -> Result<Self, ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        Ok(Self {
            id,
            spent_on,
            category,
            description,
            amount: Amount::positive("amount", amount_cents)?,
            method,
            supplier,
            receipt,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_day_must_be_a_day_of_month() {
        for bad in [0u32, 32] {
            assert!(FixedExpense::create(
                FixedExpenseId::new(),
                "Rent".into(),
                FixedExpenseCategory::Rent,
                80_000_00,
                bad,
                String::new(),
            )
            .is_err());
        }
    }

    #[test]
    fn due_soon_checks_the_next_week() {
        let rent = FixedExpense::create(
            FixedExpenseId::new(),
            "Rent".into(),
            FixedExpenseCategory::Rent,
            80_000_00,
            5,
            String::new(),
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(rent.due_soon(today));
        let later = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(!rent.due_soon(later));
    }

    #[test]
    fn variable_expense_rejects_blank_description() {
        let result = VariableExpense::record(
            VariableExpenseId::new(),
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            VariableExpenseCategory::Repairs,
            "".into(),
            10_000,
            ExpenseMethod::Cash,
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(result.is_err());
    }
}
