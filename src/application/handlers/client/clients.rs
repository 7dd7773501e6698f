//! Client use cases: registration, edits, state flips, listings.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::application::views::{
    client_detail_view, client_list_view, ClientDetailView, ClientListView,
};
use crate::domain::client::{Client, ClientDraft, ReminderStatus};
use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::{ClientFilter, ClientRepository, ReminderFilter, ReminderRepository};

use super::super::shared::require_client;

/// Command to register a new client.
#[derive(Debug, Clone)]
pub struct RegisterClientCommand {
    pub draft: ClientDraft,
    pub registered_at: DateTime<Utc>,
}

/// Handler for client registration. The repository enforces the unique
/// national ID and email at write time.
pub struct RegisterClientHandler {
    clients: Arc<dyn ClientRepository>,
}

impl RegisterClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    #[tracing::instrument(skip(self, cmd), fields(national_id = %cmd.draft.national_id))]
    pub async fn handle(&self, cmd: RegisterClientCommand) -> Result<Client, DomainError> {
        let client = Client::create(ClientId::new(), cmd.draft, cmd.registered_at)?;
        self.clients.create(&client).await?;
        tracing::info!(client_id = %client.id, "client registered");
        Ok(client)
    }
}

/// Command to edit an existing client's record.
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub id: ClientId,
    pub draft: ClientDraft,
}

/// Handler for client edits.
pub struct UpdateClientHandler {
    clients: Arc<dyn ClientRepository>,
}

impl UpdateClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, cmd: UpdateClientCommand) -> Result<Client, DomainError> {
        let mut client = require_client(self.clients.as_ref(), &cmd.id).await?;
        client.apply(cmd.draft)?;
        self.clients.update(&client).await?;
        Ok(client)
    }
}

/// Handler for activating or deactivating a client. Deactivation keeps
/// the record and its history intact.
pub struct SetClientActiveHandler {
    clients: Arc<dyn ClientRepository>,
}

impl SetClientActiveHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, id: ClientId, active: bool) -> Result<Client, DomainError> {
        let mut client = require_client(self.clients.as_ref(), &id).await?;
        if active {
            client.activate();
        } else {
            client.deactivate();
        }
        self.clients.update(&client).await?;
        tracing::info!(client_id = %client.id, active, "client flag changed");
        Ok(client)
    }
}

/// Query for client listings, including the birthday-month listing.
#[derive(Debug, Clone)]
pub struct ListClientsQuery {
    pub filter: ClientFilter,
    pub today: NaiveDate,
}

/// Handler for client listings.
pub struct ListClientsHandler {
    clients: Arc<dyn ClientRepository>,
}

impl ListClientsHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, query: ListClientsQuery) -> Result<Vec<ClientListView>, DomainError> {
        let clients = self.clients.list(&query.filter).await?;
        Ok(clients
            .iter()
            .map(|c| client_list_view(c, query.today))
            .collect())
    }
}

/// Query for the client detail view.
#[derive(Debug, Clone)]
pub struct GetClientQuery {
    pub id: ClientId,
    pub today: NaiveDate,
}

/// Handler for the client detail, including the pending-reminder count.
pub struct GetClientHandler {
    clients: Arc<dyn ClientRepository>,
    reminders: Arc<dyn ReminderRepository>,
}

impl GetClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, reminders: Arc<dyn ReminderRepository>) -> Self {
        Self { clients, reminders }
    }

    pub async fn handle(&self, query: GetClientQuery) -> Result<ClientDetailView, DomainError> {
        let client = require_client(self.clients.as_ref(), &query.id).await?;
        let pending = self
            .reminders
            .list(&ReminderFilter {
                client_id: Some(client.id),
                status: Some(ReminderStatus::Pending),
                ..Default::default()
            })
            .await?
            .len();
        Ok(client_detail_view(&client, pending, query.today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientStore, InMemoryReminderStore};
    use crate::domain::foundation::ErrorCode;

    fn draft(national_id: &str, email: &str) -> ClientDraft {
        ClientDraft {
            first_name: "Lucas".into(),
            last_name: "Pereyra".into(),
            national_id: national_id.into(),
            email: email.into(),
            phone: "11-5555-0000".into(),
            emergency_contact: String::new(),
            birth_date: NaiveDate::from_ymd_opt(1995, 3, 12).unwrap(),
            address: String::new(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn register_then_fetch_detail() {
        let clients = Arc::new(InMemoryClientStore::new());
        let reminders = Arc::new(InMemoryReminderStore::new());

        let registered = RegisterClientHandler::new(clients.clone())
            .handle(RegisterClientCommand {
                draft: draft("30111222", "lucas@example.com"),
                registered_at: Utc::now(),
            })
            .await
            .unwrap();

        let detail = GetClientHandler::new(clients, reminders)
            .handle(GetClientQuery {
                id: registered.id,
                today: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(detail.full_name, "Lucas Pereyra");
        assert_eq!(detail.age, 28);
        assert_eq!(detail.pending_reminders, 0);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_national_id() {
        let clients = Arc::new(InMemoryClientStore::new());
        let handler = RegisterClientHandler::new(clients);

        handler
            .handle(RegisterClientCommand {
                draft: draft("30111222", "first@example.com"),
                registered_at: Utc::now(),
            })
            .await
            .unwrap();
        let err = handler
            .handle(RegisterClientCommand {
                draft: draft("30111222", "second@example.com"),
                registered_at: Utc::now(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
    }

    #[tokio::test]
    async fn birthday_month_listing() {
        let clients = Arc::new(InMemoryClientStore::new());
        let handler = RegisterClientHandler::new(clients.clone());

        let mut march = draft("30111222", "march@example.com");
        march.birth_date = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        handler
            .handle(RegisterClientCommand {
                draft: march,
                registered_at: Utc::now(),
            })
            .await
            .unwrap();

        let mut july = draft("30111223", "july@example.com");
        july.birth_date = NaiveDate::from_ymd_opt(1988, 7, 20).unwrap();
        handler
            .handle(RegisterClientCommand {
                draft: july,
                registered_at: Utc::now(),
            })
            .await
            .unwrap();

        let views = ListClientsHandler::new(clients)
            .handle(ListClientsQuery {
                filter: ClientFilter {
                    birth_month: Some(3),
                    ..Default::default()
                },
                today: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].email, "march@example.com");
    }

    #[tokio::test]
    async fn deactivation_keeps_the_record() {
        let clients = Arc::new(InMemoryClientStore::new());
        let registered = RegisterClientHandler::new(clients.clone())
            .handle(RegisterClientCommand {
                draft: draft("30111222", "lucas@example.com"),
                registered_at: Utc::now(),
            })
            .await
            .unwrap();

        let updated = SetClientActiveHandler::new(clients.clone())
            .handle(registered.id, false)
            .await
            .unwrap();
        assert!(!updated.active);

        let all = clients.list(&ClientFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }
}
