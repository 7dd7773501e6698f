//! CreateMembershipHandler - links a client to a plan over a date range.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId};
use crate::domain::membership::Membership;
use crate::ports::{ClientRepository, MembershipRepository, PlanRepository};

use super::super::shared::{require_client, require_plan};

/// Command to create a membership.
#[derive(Debug, Clone)]
pub struct CreateMembershipCommand {
    pub client_id: crate::domain::foundation::ClientId,
    pub plan_id: crate::domain::foundation::PlanId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Handler for creating memberships.
///
/// Rejects the command when the referenced plan is inactive; plan price
/// and frequency invariants were already enforced at plan creation.
pub struct CreateMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
    clients: Arc<dyn ClientRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl CreateMembershipHandler {
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

    #[tracing::instrument(skip(self, cmd), fields(client_id = %cmd.client_id, plan_id = %cmd.plan_id))]
    pub async fn handle(&self, cmd: CreateMembershipCommand) -> Result<Membership, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        let plan = require_plan(self.plans.as_ref(), &cmd.plan_id).await?;

        if !plan.active {
            return Err(DomainError::new(
                ErrorCode::PlanInactive,
                format!("Plan '{}' is not on sale", plan.name),
            ));
        }

        let membership = Membership::create(
            MembershipId::new(),
            client.id,
            plan.id,
            cmd.start_date,
            cmd.end_date,
        )?;
        self.memberships.create(&membership).await?;
        tracing::info!(membership_id = %membership.id, "membership created");
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientStore, InMemoryMembershipStore, InMemoryPlanStore};
    use crate::domain::client::{Client, ClientDraft};
    use crate::domain::foundation::{ClientId, PlanId};
    use crate::domain::membership::Plan;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded() -> (CreateMembershipHandler, ClientId, PlanId, PlanId) {
        let clients = Arc::new(InMemoryClientStore::new());
        let plans = Arc::new(InMemoryPlanStore::new());
        let memberships = Arc::new(InMemoryMembershipStore::new());

        let client = Client::create(
            ClientId::new(),
            ClientDraft {
                first_name: "Ana".into(),
                last_name: "García".into(),
                national_id: "30123456".into(),
                email: "ana@example.com".into(),
                phone: String::new(),
                emergency_contact: String::new(),
                birth_date: date(1990, 6, 15),
                address: String::new(),
                notes: String::new(),
            },
            Utc::now(),
        )
        .unwrap();
        clients.create(&client).await.unwrap();

        let active_plan =
            Plan::create(PlanId::new(), "3x week".into(), 3, 150_000, String::new()).unwrap();
        plans.create(&active_plan).await.unwrap();

        let mut retired =
            Plan::create(PlanId::new(), "Old promo".into(), 2, 90_000, String::new()).unwrap();
        retired.deactivate();
        plans.create(&retired).await.unwrap();

        let handler = CreateMembershipHandler::new(memberships, clients, plans);
        (handler, client.id, active_plan.id, retired.id)
    }

    #[tokio::test]
    async fn creates_membership_on_active_plan() {
        let (handler, client_id, plan_id, _) = seeded().await;
        let membership = handler
            .handle(CreateMembershipCommand {
                client_id,
                plan_id,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 31),
            })
            .await
            .unwrap();
        assert!(membership.active);
        assert_eq!(membership.client_id, client_id);
    }

    #[tokio::test]
    async fn rejects_inactive_plan() {
        let (handler, client_id, _, retired_id) = seeded().await;
        let err = handler
            .handle(CreateMembershipCommand {
                client_id,
                plan_id: retired_id,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 31),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanInactive);
    }

    #[tokio::test]
    async fn rejects_unknown_client() {
        let (handler, _, plan_id, _) = seeded().await;
        let err = handler
            .handle(CreateMembershipCommand {
                client_id: ClientId::new(),
                plan_id,
                start_date: date(2024, 1, 1),
                end_date: date(2024, 1, 31),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ClientNotFound);
    }
}
