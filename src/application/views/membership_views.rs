//! View models for plan and membership read operations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{ClientId, MembershipId, PlanId};
use crate::domain::membership::{Membership, MembershipStatus, Plan};

/// Plan detail with derived commercial fields.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDetailView {
    pub id: PlanId,
    pub name: String,
    pub weekly_frequency: u8,
    pub price_cents: i64,
    pub price_formatted: String,
    pub description: String,
    pub active: bool,
    /// Memberships currently in a date-active state on this plan.
    pub active_memberships: usize,
}

/// Builds the plan detail; the caller counts the active memberships.
pub fn plan_detail_view(plan: &Plan, active_memberships: usize) -> PlanDetailView {
    PlanDetailView {
        id: plan.id,
        name: plan.name.clone(),
        weekly_frequency: plan.weekly_frequency.sessions(),
        price_cents: plan.price.as_cents(),
        price_formatted: plan.price.formatted(),
        description: plan.description.clone(),
        active: plan.active,
        active_memberships,
    }
}

/// Row in membership listings, including upcoming-dues.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipListView {
    pub id: MembershipId,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub plan_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MembershipStatus,
    pub status_label: &'static str,
    pub days_remaining: i64,
    pub active: bool,
}

/// Builds the list row; names are `None` when the referenced records are
/// gone.
pub fn membership_list_view(
    membership: &Membership,
    client_name: Option<String>,
    plan_name: Option<String>,
    today: NaiveDate,
) -> MembershipListView {
    let status = membership.status_on(today);
    MembershipListView {
        id: membership.id,
        client_id: membership.client_id,
        client_name,
        plan_name,
        start_date: membership.start_date,
        end_date: membership.end_date,
        status,
        status_label: status.label(),
        days_remaining: membership.days_remaining(today),
        active: membership.active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ClientId, MembershipId, PlanId};

    #[test]
    fn list_view_derives_status_and_days() {
        let membership = Membership::create(
            MembershipId::new(),
            ClientId::new(),
            PlanId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap();
        let view = membership_list_view(
            &membership,
            Some("Ana García".into()),
            Some("3x week".into()),
            NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
        );
        assert_eq!(view.status, MembershipStatus::Expiring);
        assert_eq!(view.days_remaining, 3);
        assert_eq!(view.status_label, "Expiring soon");
    }

    #[test]
    fn plan_detail_formats_price() {
        let plan = Plan::create(PlanId::new(), "Full".into(), 5, 250_000, String::new()).unwrap();
        let view = plan_detail_view(&plan, 12);
        assert_eq!(view.price_formatted, "$2,500.00");
        assert_eq!(view.active_memberships, 12);
    }
}
