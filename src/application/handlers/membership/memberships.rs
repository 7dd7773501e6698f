//! Membership read and state-transition use cases.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::views::{membership_list_view, MembershipListView};
use crate::domain::foundation::{DomainError, ErrorCode, MembershipId};
use crate::domain::membership::Membership;
use crate::ports::{ClientRepository, MembershipFilter, MembershipRepository, PlanRepository};

/// Handler for suspending or reactivating a membership. Only the active
/// flag changes; the date range is never touched.
pub struct SetMembershipActiveHandler {
    memberships: Arc<dyn MembershipRepository>,
}

impl SetMembershipActiveHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { memberships }
    }

    pub async fn handle(&self, id: MembershipId, active: bool) -> Result<Membership, DomainError> {
        let mut membership = self.memberships.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::MembershipNotFound, "Membership not found")
        })?;
        if active {
            membership.activate();
        } else {
            membership.deactivate();
        }
        self.memberships.update(&membership).await?;
        tracing::info!(membership_id = %membership.id, active, "membership flag changed");
        Ok(membership)
    }
}

/// Query for membership listings.
#[derive(Debug, Clone)]
pub struct ListMembershipsQuery {
    pub filter: MembershipFilter,
    pub today: NaiveDate,
}

/// Handler producing membership list rows joined with client and plan
/// names.
pub struct ListMembershipsHandler {
    memberships: Arc<dyn MembershipRepository>,
    clients: Arc<dyn ClientRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl ListMembershipsHandler {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        clients: Arc<dyn ClientRepository>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            memberships,
            clients,
            plans,
        }
    }

    pub async fn handle(
        &self,
        query: ListMembershipsQuery,
    ) -> Result<Vec<MembershipListView>, DomainError> {
        let memberships = self.memberships.list(&query.filter).await?;
        self.to_views(memberships, query.today).await
    }

    pub(crate) async fn to_views(
        &self,
        memberships: Vec<Membership>,
        today: NaiveDate,
    ) -> Result<Vec<MembershipListView>, DomainError> {
        let mut views = Vec::with_capacity(memberships.len());
        for membership in &memberships {
            let client_name = self
                .clients
                .find_by_id(&membership.client_id)
                .await?
                .map(|c| c.full_name());
            let plan_name = self
                .plans
                .find_by_id(&membership.plan_id)
                .await?
                .map(|p| p.name);
            views.push(membership_list_view(membership, client_name, plan_name, today));
        }
        Ok(views)
    }
}

/// Query for the upcoming-dues listing: memberships whose end date falls
/// within `[today, today + 7]`, both ends inclusive.
#[derive(Debug, Clone)]
pub struct UpcomingDuesQuery {
    pub today: NaiveDate,
}

/// Handler for the upcoming-dues listing.
pub struct UpcomingDuesHandler {
    inner: ListMembershipsHandler,
    memberships: Arc<dyn MembershipRepository>,
}

impl UpcomingDuesHandler {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        clients: Arc<dyn ClientRepository>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            inner: ListMembershipsHandler::new(memberships.clone(), clients, plans),
            memberships,
        }
    }

    pub async fn handle(
        &self,
        query: UpcomingDuesQuery,
    ) -> Result<Vec<MembershipListView>, DomainError> {
        let to = query.today + chrono::Days::new(crate::domain::foundation::calendar::DUE_SOON_WINDOW_DAYS);
        let due = self
            .memberships
            .list_ending_between(query.today, to)
            .await?;
        self.inner.to_views(due, query.today).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientStore, InMemoryMembershipStore, InMemoryPlanStore};
    use crate::domain::foundation::{ClientId, PlanId};
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn store_with_end_dates(
        today: NaiveDate,
        offsets: &[u64],
    ) -> Arc<InMemoryMembershipStore> {
        let store = Arc::new(InMemoryMembershipStore::new());
        for off in offsets {
            let m = Membership::create(
                MembershipId::new(),
                ClientId::new(),
                PlanId::new(),
                today - Days::new(30),
                today + Days::new(*off),
            )
            .unwrap();
            store.create(&m).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn upcoming_dues_window_is_inclusive_at_seven_days() {
        let today = date(2024, 5, 10);
        let memberships = store_with_end_dates(today, &[0, 7, 8, 30]).await;
        let handler = UpcomingDuesHandler::new(
            memberships,
            Arc::new(InMemoryClientStore::new()),
            Arc::new(InMemoryPlanStore::new()),
        );

        let views = handler.handle(UpcomingDuesQuery { today }).await.unwrap();
        let ends: Vec<NaiveDate> = views.iter().map(|v| v.end_date).collect();
        assert_eq!(views.len(), 2);
        assert!(ends.contains(&today));
        assert!(ends.contains(&(today + Days::new(7))));
        assert!(!ends.contains(&(today + Days::new(8))));
    }

    #[tokio::test]
    async fn suspend_keeps_dates() {
        let today = date(2024, 5, 10);
        let memberships = store_with_end_dates(today, &[10]).await;
        let stored = memberships
            .list(&MembershipFilter::default())
            .await
            .unwrap()
            .remove(0);

        let handler = SetMembershipActiveHandler::new(memberships.clone());
        let suspended = handler.handle(stored.id, false).await.unwrap();
        assert!(!suspended.active);
        assert_eq!(suspended.start_date, stored.start_date);
        assert_eq!(suspended.end_date, stored.end_date);
    }

    #[tokio::test]
    async fn unknown_membership_is_not_found() {
        let handler =
            SetMembershipActiveHandler::new(Arc::new(InMemoryMembershipStore::new()));
        let err = handler.handle(MembershipId::new(), true).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MembershipNotFound);
    }
}
