//! View models for finance read operations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::finance::{
    AccountState, AccountStatus, Payment, PaymentConcept, PaymentMethod,
};
use crate::domain::foundation::{calendar, AccountStatusId, Amount, ClientId, PaymentId};

/// Row in payment listings.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentListView {
    pub id: PaymentId,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub paid_on: NaiveDate,
    pub amount_cents: i64,
    pub amount_formatted: String,
    pub method: PaymentMethod,
    pub method_label: &'static str,
    pub concept: PaymentConcept,
    pub concept_label: &'static str,
}

pub fn payment_list_view(payment: &Payment, client_name: Option<String>) -> PaymentListView {
    PaymentListView {
        id: payment.id,
        client_id: payment.client_id,
        client_name,
        paid_on: payment.paid_on,
        amount_cents: payment.amount.as_cents(),
        amount_formatted: payment.amount.formatted(),
        method: payment.method,
        method_label: payment.method.label(),
        concept: payment.concept,
        concept_label: payment.concept.label(),
    }
}

/// Aggregate total over a calendar period. An empty period sums to zero.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodTotalView {
    /// Human label for the period, e.g. `March 2024`.
    pub period: String,
    pub total_cents: i64,
    pub total_formatted: String,
}

/// Builds the month total for whatever month `today` falls in.
pub fn month_total_view(today: NaiveDate, total: Amount) -> PeriodTotalView {
    PeriodTotalView {
        period: calendar::month_label(today),
        total_cents: total.as_cents(),
        total_formatted: total.formatted(),
    }
}

/// Total of all active fixed monthly obligations.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyObligationsView {
    pub total_cents: i64,
    pub total_formatted: String,
}

pub fn monthly_obligations_view(total: Amount) -> MonthlyObligationsView {
    MonthlyObligationsView {
        total_cents: total.as_cents(),
        total_formatted: total.formatted(),
    }
}

/// Row in account status listings.
#[derive(Debug, Clone, Serialize)]
pub struct AccountStatusListView {
    pub id: AccountStatusId,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub state: AccountState,
    pub state_label: &'static str,
    pub pending_balance_cents: i64,
    pub pending_balance_formatted: String,
    pub last_payment_on: Option<NaiveDate>,
    pub next_due_on: Option<NaiveDate>,
}

pub fn account_status_list_view(
    status: &AccountStatus,
    client_name: Option<String>,
) -> AccountStatusListView {
    AccountStatusListView {
        id: status.id,
        client_id: status.client_id,
        client_name,
        state: status.state,
        state_label: status.state.label(),
        pending_balance_cents: status.pending_balance.as_cents(),
        pending_balance_formatted: status.pending_balance.formatted(),
        last_payment_on: status.last_payment_on,
        next_due_on: status.next_due_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_total_carries_the_period_label() {
        let view = month_total_view(
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            Amount::positive("total", 123_450).unwrap(),
        );
        assert_eq!(view.period, "March 2024");
        assert_eq!(view.total_formatted, "$1,234.50");
    }

    #[test]
    fn zero_total_renders_as_zero_not_error() {
        let view = month_total_view(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(), Amount::ZERO);
        assert_eq!(view.total_cents, 0);
        assert_eq!(view.total_formatted, "$0.00");
    }
}
