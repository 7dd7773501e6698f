//! Client account status.
//!
//! The state token (`up_to_date` / `in_debt` / `suspended`) is an
//! authoritative stored field set by an external billing process. This
//! core never recomputes it from payments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountStatusId, Amount, ClientId, MembershipId, ValidationError,
};

/// Stored billing state of a client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    UpToDate,
    InDebt,
    Suspended,
}

impl AccountState {
    pub fn label(&self) -> &'static str {
        match self {
            AccountState::UpToDate => "Up to date",
            AccountState::InDebt => "In debt",
            AccountState::Suspended => "Suspended for non-payment",
        }
    }
}

/// Billing snapshot for one client; 1:1 with the client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub id: AccountStatusId,
    pub client_id: ClientId,
    pub current_membership_id: Option<MembershipId>,
    /// Outstanding balance in integer cents; never negative.
    pub pending_balance: Amount,
    pub last_payment_on: Option<NaiveDate>,
    pub next_due_on: Option<NaiveDate>,
    pub state: AccountState,
    pub notes: String,
}

impl AccountStatus {
    /// Opens an account status record for a client.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for a negative pending balance.
    pub fn open(
        id: AccountStatusId,
        client_id: ClientId,
        pending_balance_cents: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            client_id,
            current_membership_id: None,
            pending_balance: Amount::non_negative("pending_balance", pending_balance_cents)?,
            last_payment_on: None,
            next_due_on: None,
            state: AccountState::UpToDate,
            notes: String::new(),
        })
    }

    /// Applies a snapshot update from the external billing process.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_snapshot(
        &mut self,
        current_membership_id: Option<MembershipId>,
        pending_balance_cents: i64,
        last_payment_on: Option<NaiveDate>,
        next_due_on: Option<NaiveDate>,
        state: AccountState,
        notes: String,
    ) -> Result<(), ValidationError> {
        self.pending_balance = Amount::non_negative("pending_balance", pending_balance_cents)?;
        self.current_membership_id = current_membership_id;
        self.last_payment_on = last_payment_on;
        self.next_due_on = next_due_on;
        self.state = state;
        self.notes = notes;
        Ok(())
    }

    /// Whether the next due date falls within `[today, today + 7]`.
    pub fn due_within_window(&self, today: NaiveDate) -> bool {
        self.next_due_on
            .map(|due| crate::domain::foundation::calendar::in_due_window(due, today))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_balance_rejected_zero_allowed() {
        assert!(AccountStatus::open(AccountStatusId::new(), ClientId::new(), -1).is_err());
        let status = AccountStatus::open(AccountStatusId::new(), ClientId::new(), 0).unwrap();
        assert_eq!(status.state, AccountState::UpToDate);
    }

    #[test]
    fn missing_next_due_date_is_never_due_soon() {
        let status = AccountStatus::open(AccountStatusId::new(), ClientId::new(), 0).unwrap();
        assert!(!status.due_within_window(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }

    #[test]
    fn state_tokens_match_the_stored_values() {
        assert_eq!(
            serde_json::to_string(&AccountState::UpToDate).unwrap(),
            "\"up_to_date\""
        );
        assert_eq!(
            serde_json::to_string(&AccountState::InDebt).unwrap(),
            "\"in_debt\""
        );
    }
}
