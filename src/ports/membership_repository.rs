//! Membership repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{ClientId, DomainError, MembershipId, PlanId};
use crate::domain::membership::Membership;

/// Query filter for membership listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct MembershipFilter {
    pub client_id: Option<ClientId>,
    pub plan_id: Option<PlanId>,
    pub active: Option<bool>,
}

/// Repository port for membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Persists a new membership.
    async fn create(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Replaces an existing membership.
    ///
    /// # Errors
    ///
    /// `MembershipNotFound` when the membership does not exist.
    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Finds a membership by ID.
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// Lists memberships matching the filter, ordered by start date.
    async fn list(&self, filter: &MembershipFilter) -> Result<Vec<Membership>, DomainError>;

    /// Lists memberships whose `end_date` falls within `[from, to]`,
    /// inclusive on both ends. Backs the "upcoming dues" view.
    async fn list_ending_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Membership>, DomainError>;
}
