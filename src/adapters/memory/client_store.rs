//! In-memory stores for clients, fingerprints, and reminders.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Datelike;

use crate::domain::client::{Client, Fingerprint, NationalId, Reminder};
use crate::domain::foundation::{ClientId, DomainError, ErrorCode, FingerprintId, ReminderId};
use crate::ports::{
    ClientFilter, ClientRepository, FingerprintFilter, FingerprintRepository, ReminderFilter,
    ReminderRepository,
};

use super::{read_table, write_table};

/// Client table with unique national ID and email.
#[derive(Default)]
pub struct InMemoryClientStore {
    table: RwLock<Vec<Client>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(
        table: &[Client],
        candidate: &Client,
        exclude: Option<&ClientId>,
    ) -> Result<(), DomainError> {
        for existing in table {
            if Some(&existing.id) == exclude {
                continue;
            }
            if existing.national_id == candidate.national_id {
                return Err(DomainError::duplicate(
                    "national_id",
                    format!("National ID '{}' is already registered", candidate.national_id),
                ));
            }
            if existing.email.eq_ignore_ascii_case(&candidate.email) {
                return Err(DomainError::duplicate(
                    "email",
                    format!("Email '{}' is already registered", candidate.email),
                ));
            }
        }
        Ok(())
    }

    fn matches(client: &Client, filter: &ClientFilter) -> bool {
        if let Some(active) = filter.active {
            if client.active != active {
                return false;
            }
        }
        if let Some(national_id) = &filter.national_id {
            if client.national_id.to_string() != *national_id {
                return false;
            }
        }
        if let Some(term) = &filter.search {
            if !client.name_matches(term) {
                return false;
            }
        }
        if let Some(month) = filter.birth_month {
            if client.birth_date.month() != month {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientStore {
    async fn create(&self, client: &Client) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        Self::check_unique(&table, client, None)?;
        table.push(client.clone());
        Ok(())
    }

    async fn update(&self, client: &Client) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        Self::check_unique(&table, client, Some(&client.id))?;
        let slot = table
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or_else(|| DomainError::new(ErrorCode::ClientNotFound, "Client not found"))?;
        *slot = client.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|c| c.id == *id).cloned())
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<Client>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|c| c.national_id == *national_id).cloned())
    }

    async fn list(&self, filter: &ClientFilter) -> Result<Vec<Client>, DomainError> {
        let table = read_table(&self.table)?;
        let mut clients: Vec<Client> = table
            .iter()
            .filter(|c| Self::matches(c, filter))
            .cloned()
            .collect();
        clients.sort_by_key(|c| c.registered_at);
        Ok(clients)
    }
}

/// Fingerprint table with one record per client.
#[derive(Default)]
pub struct InMemoryFingerprintStore {
    table: RwLock<Vec<Fingerprint>>,
}

impl InMemoryFingerprintStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FingerprintRepository for InMemoryFingerprintStore {
    async fn create(&self, fingerprint: &Fingerprint) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        if table.iter().any(|f| f.client_id == fingerprint.client_id) {
            return Err(DomainError::duplicate(
                "client_id",
                "Client already has a fingerprint enrolled",
            ));
        }
        table.push(fingerprint.clone());
        Ok(())
    }

    async fn update(&self, fingerprint: &Fingerprint) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|f| f.id == fingerprint.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::FingerprintNotFound, "Fingerprint not found")
            })?;
        *slot = fingerprint.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &FingerprintId) -> Result<Option<Fingerprint>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|f| f.id == *id).cloned())
    }

    async fn find_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<Fingerprint>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|f| f.client_id == *client_id).cloned())
    }

    async fn list(&self, filter: &FingerprintFilter) -> Result<Vec<Fingerprint>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table
            .iter()
            .filter(|f| filter.client_id.map_or(true, |id| f.client_id == id))
            .filter(|f| filter.active.map_or(true, |a| f.active == a))
            .cloned()
            .collect())
    }
}

/// Reminder table ordered by scheduled time.
#[derive(Default)]
pub struct InMemoryReminderStore {
    table: RwLock<Vec<Reminder>>,
}

impl InMemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReminderRepository for InMemoryReminderStore {
    async fn create(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        table.push(reminder.clone());
        Ok(())
    }

    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError> {
        let mut table = write_table(&self.table)?;
        let slot = table
            .iter_mut()
            .find(|r| r.id == reminder.id)
            .ok_or_else(|| DomainError::new(ErrorCode::ReminderNotFound, "Reminder not found"))?;
        *slot = reminder.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError> {
        let table = read_table(&self.table)?;
        Ok(table.iter().find(|r| r.id == *id).cloned())
    }

    async fn list(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>, DomainError> {
        let table = read_table(&self.table)?;
        let mut reminders: Vec<Reminder> = table
            .iter()
            .filter(|r| filter.client_id.map_or(true, |id| r.client_id == id))
            .filter(|r| filter.status.map_or(true, |s| r.status == s))
            .filter(|r| filter.kind.map_or(true, |k| r.kind == k))
            .filter(|r| {
                filter
                    .scheduled_on
                    .map_or(true, |d| r.scheduled_for.date_naive() == d)
            })
            .cloned()
            .collect();
        reminders.sort_by_key(|r| r.scheduled_for);
        Ok(reminders)
    }
}
