//! In-memory stores for plans and memberships.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId, PlanId};
use crate::domain::membership::{Membership, Plan};
use crate::ports::{
    MembershipFilter, MembershipRepository, PlanFilter, PlanRepository,
};

use super::{read_table, write_table};

/// Plan table ordered by name on read.
#[derive(Default)]
pub struct InMemoryPlanStore {
    table: RwLock<Vec<Plan>>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanStore {
    async fn create(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(plan.clone());
        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|p| p.id == plan.id)
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))?;
        *slot = plan.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|p| p.id == *id).cloned())
    }

    async fn list(&self, filter: &PlanFilter) -> Result<Vec<Plan>, DomainError> {
        let table = read_table(&self.table)?;
        let mut plans: Vec<Plan> = table
            .iter()
            .filter(|p| filter.active.map_or(true, |a| p.active == a))
            .cloned()
            .collect();
        plans.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(plans)
    }
}

/// Membership table ordered by start date on read.
#[derive(Default)]
pub struct InMemoryMembershipStore {
    table: RwLock<Vec<Membership>>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipStore {
    async fn create(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(membership.clone());
        Ok(())
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|m| m.id == membership.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::MembershipNotFound, "Membership not found")
            })?;
        *slot = membership.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|m| m.id == *id).cloned())
    }

    async fn list(&self, filter: &MembershipFilter) -> Result<Vec<Membership>, DomainError> {
        let table = read_table(&self.table)?;
        let mut memberships: Vec<Membership> = table
            .iter()
            .filter(|m| filter.client_id.map_or(true, |id| m.client_id == id))
            .filter(|m| filter.plan_id.map_or(true, |id| m.plan_id == id))
            .filter(|m| filter.active.map_or(true, |a| m.active == a))
            .cloned()
            .collect();
        memberships.sort_by_key(|m| m.start_date);
        Ok(memberships)
    }

    async fn list_ending_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Membership>, DomainError> {
        let table = read_table(&self.table)?;
        let mut memberships: Vec<Membership> = table
            .iter()
            .filter(|m| m.end_date >= from && m.end_date <= to)
            .cloned()
            .collect();
        memberships.sort_by_key(|m| m.end_date);
        Ok(memberships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClientId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn ending_between_is_inclusive_on_both_ends() {
        let store = InMemoryMembershipStore::new();
        for end in [date(2024, 5, 10), date(2024, 5, 17), date(2024, 5, 18)] {
            let m = Membership::create(
                MembershipId::new(),
                ClientId::new(),
                PlanId::new(),
                date(2024, 4, 10),
                end,
            )
            .unwrap();
            store.create(&m).await.unwrap();
        }

        let hits = store
            .list_ending_between(date(2024, 5, 10), date(2024, 5, 17))
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].end_date, date(2024, 5, 10));
        assert_eq!(hits[1].end_date, date(2024, 5, 17));
    }

    #[tokio::test]
    async fn plans_list_orders_by_name() {
        let store = InMemoryPlanStore::new();
        for name in ["Weights 5x", "Basic 2x", "Standard 3x"] {
            let plan = Plan::create(PlanId::new(), name.into(), 2, 100_000, String::new()).unwrap();
            store.create(&plan).await.unwrap();
        }
        let plans = store.list(&PlanFilter::default()).await.unwrap();
        let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Basic 2x", "Standard 3x", "Weights 5x"]);
    }
}
