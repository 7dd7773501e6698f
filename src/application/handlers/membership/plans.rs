//! Plan use cases: create, update, activate/deactivate, list, detail.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::views::{plan_detail_view, PlanDetailView};
use crate::domain::foundation::{DomainError, ErrorCode, PlanId};
use crate::domain::membership::{MembershipStatus, Plan};
use crate::ports::{MembershipFilter, MembershipRepository, PlanFilter, PlanRepository};

/// Command to create a membership plan.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub weekly_frequency: u8,
    pub price_cents: i64,
    pub description: String,
}

/// Handler for creating plans.
pub struct CreatePlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    #[tracing::instrument(skip(self, cmd), fields(plan_name = %cmd.name))]
    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<Plan, DomainError> {
        let plan = Plan::create(
            PlanId::new(),
            cmd.name,
            cmd.weekly_frequency,
            cmd.price_cents,
            cmd.description,
        )?;
        self.plans.create(&plan).await?;
        tracing::info!(plan_id = %plan.id, "plan created");
        Ok(plan)
    }
}

/// Command to update a plan's product fields.
#[derive(Debug, Clone)]
pub struct UpdatePlanCommand {
    pub id: PlanId,
    pub name: String,
    pub weekly_frequency: u8,
    pub price_cents: i64,
    pub description: String,
}

/// Handler for updating plans.
pub struct UpdatePlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl UpdatePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, cmd: UpdatePlanCommand) -> Result<Plan, DomainError> {
        let mut plan = self
            .plans
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))?;
        plan.update(cmd.name, cmd.weekly_frequency, cmd.price_cents, cmd.description)?;
        self.plans.update(&plan).await?;
        Ok(plan)
    }
}

/// Handler for taking a plan on or off sale.
pub struct SetPlanActiveHandler {
    plans: Arc<dyn PlanRepository>,
}

impl SetPlanActiveHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, id: PlanId, active: bool) -> Result<Plan, DomainError> {
        let mut plan = self
            .plans
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))?;
        if active {
            plan.activate();
        } else {
            plan.deactivate();
        }
        self.plans.update(&plan).await?;
        Ok(plan)
    }
}

/// Query for listing plans.
#[derive(Debug, Clone, Default)]
pub struct ListPlansQuery {
    pub filter: PlanFilter,
}

/// Handler for listing plans.
pub struct ListPlansHandler {
    plans: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, query: ListPlansQuery) -> Result<Vec<Plan>, DomainError> {
        self.plans.list(&query.filter).await
    }
}

/// Query for the plan detail view.
#[derive(Debug, Clone)]
pub struct GetPlanQuery {
    pub id: PlanId,
    pub today: NaiveDate,
}

/// Handler for the plan detail, including the derived count of
/// memberships currently active on the plan.
pub struct GetPlanHandler {
    plans: Arc<dyn PlanRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl GetPlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { plans, memberships }
    }

    pub async fn handle(&self, query: GetPlanQuery) -> Result<PlanDetailView, DomainError> {
        let plan = self
            .plans
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))?;

        let memberships = self
            .memberships
            .list(&MembershipFilter {
                plan_id: Some(plan.id),
                ..Default::default()
            })
            .await?;
        let active = memberships
            .iter()
            .filter(|m| m.status_on(query.today) != MembershipStatus::Expired && m.active)
            .count();

        Ok(plan_detail_view(&plan, active))
    }
}
