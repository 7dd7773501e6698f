//! Membership aggregate entity.
//!
//! Links one client to one plan over a date range. Status and days
//! remaining are derived on read; activation and deactivation flip the
//! active flag only and never touch the date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{calendar, ClientId, MembershipId, PlanId, ValidationError};

use super::MembershipStatus;

/// A client's subscription to a plan over `[start_date, end_date]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub client_id: ClientId,
    pub plan_id: PlanId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}

impl Membership {
    /// Creates a new active membership.
    ///
    /// Plan-level checks (plan must exist and be active) happen in the
    /// application handler; this only validates the date range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when `end_date < start_date`.
    pub fn create(
        id: MembershipId,
        client_id: ClientId,
        plan_id: PlanId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                "cannot be before start_date",
            ));
        }
        Ok(Self {
            id,
            client_id,
            plan_id,
            start_date,
            end_date,
            active: true,
        })
    }

    /// Days from `today` until the end of the membership, floored at zero.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        calendar::days_remaining(self.end_date, today)
    }

    /// Derived status at `today`.
    ///
    /// Suspension (inactive flag) wins over the date-derived states, so a
    /// deactivated membership never reads as "expiring".
    pub fn status_on(&self, today: NaiveDate) -> MembershipStatus {
        if !self.active {
            return MembershipStatus::Suspended;
        }
        if today > self.end_date {
            return MembershipStatus::Expired;
        }
        if calendar::in_due_window(self.end_date, today) {
            return MembershipStatus::Expiring;
        }
        MembershipStatus::Active
    }

    /// Whether the end date falls within the upcoming-dues window
    /// `[today, today + 7]`, inclusive on both ends.
    pub fn due_within_window(&self, today: NaiveDate) -> bool {
        calendar::in_due_window(self.end_date, today)
    }

    /// Suspends the membership. Dates are untouched.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Lifts a suspension. Dates are untouched.
    pub fn activate(&mut self) {
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn membership(start: NaiveDate, end: NaiveDate) -> Membership {
        Membership::create(MembershipId::new(), ClientId::new(), PlanId::new(), start, end)
            .unwrap()
    }

    #[test]
    fn rejects_inverted_date_range() {
        let result = Membership::create(
            MembershipId::new(),
            ClientId::new(),
            PlanId::new(),
            date(2024, 2, 1),
            date(2024, 1, 1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn days_remaining_is_never_negative() {
        let m = membership(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(m.days_remaining(date(2024, 1, 21)), 10);
        assert_eq!(m.days_remaining(date(2024, 1, 31)), 0);
        assert_eq!(m.days_remaining(date(2024, 6, 1)), 0);
    }

    #[test]
    fn status_derivation_by_date() {
        let m = membership(date(2024, 1, 1), date(2024, 3, 1));
        assert_eq!(m.status_on(date(2024, 1, 15)), MembershipStatus::Active);
        assert_eq!(m.status_on(date(2024, 2, 25)), MembershipStatus::Expiring);
        // Boundary: exactly seven days ahead is still expiring.
        assert_eq!(m.status_on(date(2024, 2, 23)), MembershipStatus::Expiring);
        assert_eq!(m.status_on(date(2024, 2, 22)), MembershipStatus::Active);
        assert_eq!(m.status_on(date(2024, 3, 2)), MembershipStatus::Expired);
    }

    #[test]
    fn suspension_wins_over_dates() {
        let mut m = membership(date(2024, 1, 1), date(2024, 3, 1));
        m.deactivate();
        assert_eq!(m.status_on(date(2024, 2, 25)), MembershipStatus::Suspended);
        assert_eq!(m.status_on(date(2024, 6, 1)), MembershipStatus::Suspended);
        // Dates untouched by the flag flip.
        assert_eq!(m.start_date, date(2024, 1, 1));
        assert_eq!(m.end_date, date(2024, 3, 1));
    }

    #[test]
    fn due_window_boundaries() {
        let today = date(2024, 5, 10);
        let at_seven = membership(date(2024, 4, 1), today + chrono::Days::new(7));
        let at_eight = membership(date(2024, 4, 1), today + chrono::Days::new(8));
        assert!(at_seven.due_within_window(today));
        assert!(!at_eight.due_within_window(today));
    }
}
