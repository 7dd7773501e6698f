//! Account status repository port. One record per client.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::finance::{AccountState, AccountStatus};
use crate::domain::foundation::{AccountStatusId, ClientId, DomainError};

/// Query filter for account status listings.
#[derive(Debug, Clone, Default)]
pub struct AccountStatusFilter {
    pub state: Option<AccountState>,
    pub client_id: Option<ClientId>,
}

/// Repository port for account status persistence.
#[async_trait]
pub trait AccountStatusRepository: Send + Sync {
    /// Persists a new account status.
    ///
    /// # Errors
    ///
    /// `DuplicateKey` when the client already has one.
    async fn create(&self, status: &AccountStatus) -> Result<(), DomainError>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// `AccountStatusNotFound` when the record does not exist.
    async fn update(&self, status: &AccountStatus) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &AccountStatusId) -> Result<Option<AccountStatus>, DomainError>;

    async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<AccountStatus>, DomainError>;

    /// Lists account statuses matching the filter.
    async fn list(&self, filter: &AccountStatusFilter) -> Result<Vec<AccountStatus>, DomainError>;

    /// Lists records whose `next_due_on` falls within `[from, to]`.
    async fn list_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AccountStatus>, DomainError>;
}
