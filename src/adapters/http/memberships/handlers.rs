//! HTTP handlers for plan and membership endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::membership::{
    CreateMembershipCommand, CreateMembershipHandler, CreatePlanCommand, CreatePlanHandler,
    GetPlanHandler, GetPlanQuery, ListMembershipsHandler, ListMembershipsQuery, ListPlansHandler,
    ListPlansQuery, SetMembershipActiveHandler, SetPlanActiveHandler, UpcomingDuesHandler,
    UpcomingDuesQuery, UpdatePlanCommand, UpdatePlanHandler,
};
use crate::domain::foundation::{MembershipId, PlanId};

use super::dto::{MembershipQuery, MembershipRequest, PlanQuery, PlanRequest};

/// Router state for the membership endpoints.
#[derive(Clone)]
pub struct MembershipHandlers {
    pub create_plan: Arc<CreatePlanHandler>,
    pub update_plan: Arc<UpdatePlanHandler>,
    pub set_plan_active: Arc<SetPlanActiveHandler>,
    pub list_plans: Arc<ListPlansHandler>,
    pub get_plan: Arc<GetPlanHandler>,
    pub create_membership: Arc<CreateMembershipHandler>,
    pub set_membership_active: Arc<SetMembershipActiveHandler>,
    pub list_memberships: Arc<ListMembershipsHandler>,
    pub upcoming_dues: Arc<UpcomingDuesHandler>,
}

/// POST /api/plans
pub async fn create_plan(
    State(handlers): State<MembershipHandlers>,
    Json(req): Json<PlanRequest>,
) -> Response {
    let cmd = CreatePlanCommand {
        name: req.name,
        weekly_frequency: req.weekly_frequency,
        price_cents: req.price_cents,
        description: req.description,
    };
    match handlers.create_plan.handle(cmd).await {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/plans
pub async fn list_plans(
    State(handlers): State<MembershipHandlers>,
    Query(query): Query<PlanQuery>,
) -> Response {
    let query = ListPlansQuery {
        filter: query.into_filter(),
    };
    match handlers.list_plans.handle(query).await {
        Ok(plans) => (StatusCode::OK, Json(plans)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/plans/:id
pub async fn get_plan(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<PlanId>,
) -> Response {
    let query = GetPlanQuery {
        id,
        today: Utc::now().date_naive(),
    };
    match handlers.get_plan.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/plans/:id
pub async fn update_plan(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<PlanId>,
    Json(req): Json<PlanRequest>,
) -> Response {
    let cmd = UpdatePlanCommand {
        id,
        name: req.name,
        weekly_frequency: req.weekly_frequency,
        price_cents: req.price_cents,
        description: req.description,
    };
    match handlers.update_plan.handle(cmd).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/plans/:id/activate
pub async fn activate_plan(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<PlanId>,
) -> Response {
    match handlers.set_plan_active.handle(id, true).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/plans/:id/deactivate
pub async fn deactivate_plan(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<PlanId>,
) -> Response {
    match handlers.set_plan_active.handle(id, false).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/memberships
pub async fn create_membership(
    State(handlers): State<MembershipHandlers>,
    Json(req): Json<MembershipRequest>,
) -> Response {
    let cmd = CreateMembershipCommand {
        client_id: req.client_id,
        plan_id: req.plan_id,
        start_date: req.start_date,
        end_date: req.end_date,
    };
    match handlers.create_membership.handle(cmd).await {
        Ok(membership) => (StatusCode::CREATED, Json(membership)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/memberships
pub async fn list_memberships(
    State(handlers): State<MembershipHandlers>,
    Query(query): Query<MembershipQuery>,
) -> Response {
    let query = ListMembershipsQuery {
        filter: query.into_filter(),
        today: Utc::now().date_naive(),
    };
    match handlers.list_memberships.handle(query).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/memberships/upcoming-dues
pub async fn upcoming_dues(State(handlers): State<MembershipHandlers>) -> Response {
    let query = UpcomingDuesQuery {
        today: Utc::now().date_naive(),
    };
    match handlers.upcoming_dues.handle(query).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/memberships/:id/activate
pub async fn activate_membership(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<MembershipId>,
) -> Response {
    match handlers.set_membership_active.handle(id, true).await {
        Ok(membership) => (StatusCode::OK, Json(membership)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/memberships/:id/deactivate
pub async fn deactivate_membership(
    State(handlers): State<MembershipHandlers>,
    Path(id): Path<MembershipId>,
) -> Response {
    match handlers.set_membership_active.handle(id, false).await {
        Ok(membership) => (StatusCode::OK, Json(membership)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
