//! Reminder repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::client::{Reminder, ReminderKind, ReminderStatus};
use crate::domain::foundation::{ClientId, DomainError, ReminderId};

/// Query filter for reminder listings; criteria combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    pub client_id: Option<ClientId>,
    pub status: Option<ReminderStatus>,
    pub kind: Option<ReminderKind>,
    /// Calendar date the reminder is scheduled for (UTC).
    pub scheduled_on: Option<NaiveDate>,
}

/// Repository port for reminder persistence.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Persists a new reminder.
    async fn create(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// Replaces an existing reminder (state transitions included).
    ///
    /// # Errors
    ///
    /// `ReminderNotFound` when the reminder does not exist.
    async fn update(&self, reminder: &Reminder) -> Result<(), DomainError>;

    /// Finds a reminder by ID.
    async fn find_by_id(&self, id: &ReminderId) -> Result<Option<Reminder>, DomainError>;

    /// Lists reminders matching the filter, ordered by scheduled time.
    async fn list(&self, filter: &ReminderFilter) -> Result<Vec<Reminder>, DomainError>;
}
