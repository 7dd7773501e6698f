//! Account status use cases. The state token is written by an external
//! billing process; this side only stores and reads it.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::views::{account_status_list_view, AccountStatusListView};
use crate::domain::finance::{AccountState, AccountStatus};
use crate::domain::foundation::{
    calendar, AccountStatusId, ClientId, DomainError, ErrorCode, MembershipId,
};
use crate::ports::{AccountStatusFilter, AccountStatusRepository, ClientRepository};

use super::super::shared::require_client;

/// Command to open an account status record for a client.
#[derive(Debug, Clone)]
pub struct OpenAccountStatusCommand {
    pub client_id: ClientId,
    pub pending_balance_cents: i64,
}

/// Handler for opening account status records; one per client, the
/// repository rejects a second.
pub struct OpenAccountStatusHandler {
    statuses: Arc<dyn AccountStatusRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl OpenAccountStatusHandler {
    pub fn new(
        statuses: Arc<dyn AccountStatusRepository>,
        clients: Arc<dyn ClientRepository>,
    ) -> Self {
        Self { statuses, clients }
    }

    pub async fn handle(&self, cmd: OpenAccountStatusCommand) -> Result<AccountStatus, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        let status =
            AccountStatus::open(AccountStatusId::new(), client.id, cmd.pending_balance_cents)?;
        self.statuses.create(&status).await?;
        tracing::info!(status_id = %status.id, client_id = %client.id, "account status opened");
        Ok(status)
    }
}

/// Snapshot update pushed by the external billing process.
#[derive(Debug, Clone)]
pub struct UpdateAccountStatusCommand {
    pub id: AccountStatusId,
    pub current_membership_id: Option<MembershipId>,
    pub pending_balance_cents: i64,
    pub last_payment_on: Option<NaiveDate>,
    pub next_due_on: Option<NaiveDate>,
    pub state: AccountState,
    pub notes: String,
}

/// Handler applying billing snapshots.
pub struct UpdateAccountStatusHandler {
    statuses: Arc<dyn AccountStatusRepository>,
}

impl UpdateAccountStatusHandler {
    pub fn new(statuses: Arc<dyn AccountStatusRepository>) -> Self {
        Self { statuses }
    }

    pub async fn handle(&self, cmd: UpdateAccountStatusCommand) -> Result<AccountStatus, DomainError> {
        let mut status = self.statuses.find_by_id(&cmd.id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::AccountStatusNotFound, "Account status not found")
        })?;
        status.apply_snapshot(
            cmd.current_membership_id,
            cmd.pending_balance_cents,
            cmd.last_payment_on,
            cmd.next_due_on,
            cmd.state,
            cmd.notes,
        )?;
        self.statuses.update(&status).await?;
        Ok(status)
    }
}

/// Handler for account status listings, including the due-soon view.
pub struct ListAccountStatusesHandler {
    statuses: Arc<dyn AccountStatusRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ListAccountStatusesHandler {
    pub fn new(
        statuses: Arc<dyn AccountStatusRepository>,
        clients: Arc<dyn ClientRepository>,
    ) -> Self {
        Self { statuses, clients }
    }

    pub async fn handle(
        &self,
        filter: AccountStatusFilter,
    ) -> Result<Vec<AccountStatusListView>, DomainError> {
        let statuses = self.statuses.list(&filter).await?;
        self.to_views(statuses).await
    }

    /// Accounts whose next due date falls within `[today, today + 7]`.
    pub async fn upcoming_dues(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<AccountStatusListView>, DomainError> {
        let to = today + chrono::Days::new(calendar::DUE_SOON_WINDOW_DAYS);
        let statuses = self.statuses.list_due_between(today, to).await?;
        self.to_views(statuses).await
    }

    async fn to_views(
        &self,
        statuses: Vec<AccountStatus>,
    ) -> Result<Vec<AccountStatusListView>, DomainError> {
        let mut views = Vec::with_capacity(statuses.len());
        for status in &statuses {
            let client_name = self
                .clients
                .find_by_id(&status.client_id)
                .await?
                .map(|c| c.full_name());
            views.push(account_status_list_view(status, client_name));
        }
        Ok(views)
    }
}
