//! Small lookup helpers shared by the use-case handlers.

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, DomainError, ErrorCode, PlanId, RoutineId, WeekId};
use crate::domain::membership::Plan;
use crate::domain::routine::{Routine, Week};
use crate::ports::{ClientRepository, PlanRepository, RoutineRepository};

/// Loads a client or fails with `ClientNotFound`.
pub async fn require_client(
    clients: &dyn ClientRepository,
    id: &ClientId,
) -> Result<Client, DomainError> {
    clients
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::ClientNotFound, "Client not found"))
}

/// Loads a plan or fails with `PlanNotFound`.
pub async fn require_plan(plans: &dyn PlanRepository, id: &PlanId) -> Result<Plan, DomainError> {
    plans
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, "Plan not found"))
}

/// Loads a routine or fails with `RoutineNotFound`.
pub async fn require_routine(
    routines: &dyn RoutineRepository,
    id: &RoutineId,
) -> Result<Routine, DomainError> {
    routines
        .find_routine(id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::RoutineNotFound, "Routine not found"))
}

/// Loads a week or fails with `WeekNotFound`.
pub async fn require_week(
    routines: &dyn RoutineRepository,
    id: &WeekId,
) -> Result<Week, DomainError> {
    routines
        .find_week(id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::WeekNotFound, "Week not found"))
}
