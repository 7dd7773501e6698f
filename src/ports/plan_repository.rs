//! Plan repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::membership::Plan;

/// Query filter for plan listings.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    pub active: Option<bool>,
}

/// Repository port for membership plan persistence.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Persists a new plan.
    async fn create(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Replaces an existing plan.
    ///
    /// # Errors
    ///
    /// `PlanNotFound` when the plan does not exist.
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Finds a plan by ID.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// Lists plans matching the filter, ordered by name.
    async fn list(&self, filter: &PlanFilter) -> Result<Vec<Plan>, DomainError>;
}
