//! Routes for plan and membership endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    activate_membership, activate_plan, create_membership, create_plan, deactivate_membership,
    deactivate_plan, get_plan, list_memberships, list_plans, update_plan, upcoming_dues,
    MembershipHandlers,
};

/// Builds the membership router, mounted under `/api`.
pub fn membership_routes(handlers: MembershipHandlers) -> Router {
    Router::new()
        .route("/plans", post(create_plan).get(list_plans))
        .route("/plans/:id", get(get_plan))
        .route("/plans/:id", put(update_plan))
        .route("/plans/:id/activate", post(activate_plan))
        .route("/plans/:id/deactivate", post(deactivate_plan))
        .route(
            "/memberships",
            post(create_membership).get(list_memberships),
        )
        .route("/memberships/upcoming-dues", get(upcoming_dues))
        .route("/memberships/:id/activate", post(activate_membership))
        .route("/memberships/:id/deactivate", post(deactivate_membership))
        .with_state(handlers)
}
