//! Wire types for plan and membership endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{ClientId, PlanId};
use crate::ports::{MembershipFilter, PlanFilter};

/// Body for creating or updating a plan.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub name: String,
    /// Sessions per week; 2, 3, or 5.
    pub weekly_frequency: u8,
    pub price_cents: i64,
    #[serde(default)]
    pub description: String,
}

/// Query string for plan listings.
#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    pub active: Option<bool>,
}

impl PlanQuery {
    pub fn into_filter(self) -> PlanFilter {
        PlanFilter {
            active: self.active,
        }
    }
}

/// Body for creating a membership.
#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    pub client_id: ClientId,
    pub plan_id: PlanId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query string for membership listings.
#[derive(Debug, Default, Deserialize)]
pub struct MembershipQuery {
    pub client_id: Option<ClientId>,
    pub plan_id: Option<PlanId>,
    pub active: Option<bool>,
}

impl MembershipQuery {
    pub fn into_filter(self) -> MembershipFilter {
        MembershipFilter {
            client_id: self.client_id,
            plan_id: self.plan_id,
            active: self.active,
        }
    }
}
