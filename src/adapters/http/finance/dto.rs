//! Wire types for payment, expense, and account status endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::finance::{
    AccountState, ExpenseMethod, FixedExpenseCategory, PaymentConcept, PaymentMethod,
    VariableExpenseCategory,
};
use crate::domain::foundation::{ClientId, MembershipId};
use crate::ports::{
    AccountStatusFilter, FixedExpenseFilter, PaymentFilter, VariableExpenseFilter,
};

/// Body for recording a payment.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub client_id: ClientId,
    pub membership_id: Option<MembershipId>,
    pub paid_on: NaiveDate,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub concept: PaymentConcept,
    #[serde(default)]
    pub notes: String,
}

/// Query string for payment listings.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentQuery {
    pub client_id: Option<ClientId>,
    pub membership_id: Option<MembershipId>,
    pub method: Option<PaymentMethod>,
    pub concept: Option<PaymentConcept>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PaymentQuery {
    pub fn into_filter(self) -> PaymentFilter {
        PaymentFilter {
            client_id: self.client_id,
            membership_id: self.membership_id,
            method: self.method,
            concept: self.concept,
            from: self.from,
            to: self.to,
        }
    }
}

/// Body for creating a fixed monthly expense.
#[derive(Debug, Deserialize)]
pub struct FixedExpenseRequest {
    pub name: String,
    pub category: FixedExpenseCategory,
    pub monthly_amount_cents: i64,
    pub due_day: u32,
    #[serde(default)]
    pub notes: String,
}

/// Query string for fixed expense listings.
#[derive(Debug, Default, Deserialize)]
pub struct FixedExpenseQuery {
    pub active: Option<bool>,
    pub category: Option<FixedExpenseCategory>,
}

impl FixedExpenseQuery {
    pub fn into_filter(self) -> FixedExpenseFilter {
        FixedExpenseFilter {
            active: self.active,
            category: self.category,
        }
    }
}

/// Body for recording a variable expense.
#[derive(Debug, Deserialize)]
pub struct VariableExpenseRequest {
    pub spent_on: NaiveDate,
    pub category: VariableExpenseCategory,
    pub description: String,
    pub amount_cents: i64,
    pub method: ExpenseMethod,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub receipt: String,
    #[serde(default)]
    pub notes: String,
}

/// Query string for variable expense listings.
#[derive(Debug, Default, Deserialize)]
pub struct VariableExpenseQuery {
    pub category: Option<VariableExpenseCategory>,
    pub method: Option<ExpenseMethod>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl VariableExpenseQuery {
    pub fn into_filter(self) -> VariableExpenseFilter {
        VariableExpenseFilter {
            category: self.category,
            method: self.method,
            from: self.from,
            to: self.to,
        }
    }
}

/// Body for opening an account status record.
#[derive(Debug, Deserialize)]
pub struct OpenAccountStatusRequest {
    pub client_id: ClientId,
    #[serde(default)]
    pub pending_balance_cents: i64,
}

/// Body for a billing snapshot update.
#[derive(Debug, Deserialize)]
pub struct AccountStatusSnapshotRequest {
    pub current_membership_id: Option<MembershipId>,
    pub pending_balance_cents: i64,
    pub last_payment_on: Option<NaiveDate>,
    pub next_due_on: Option<NaiveDate>,
    pub state: AccountState,
    #[serde(default)]
    pub notes: String,
}

/// Query string for account status listings.
#[derive(Debug, Default, Deserialize)]
pub struct AccountStatusQuery {
    pub state: Option<AccountState>,
    pub client_id: Option<ClientId>,
}

impl AccountStatusQuery {
    pub fn into_filter(self) -> AccountStatusFilter {
        AccountStatusFilter {
            state: self.state,
            client_id: self.client_id,
        }
    }
}
