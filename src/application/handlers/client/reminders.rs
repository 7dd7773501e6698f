//! Reminder use cases: scheduling, transitions, listings.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::application::views::{reminder_list_view, ReminderListView};
use crate::domain::client::{Reminder, ReminderChannel, ReminderKind, ReminderStatus};
use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ReminderId};
use crate::ports::{ClientRepository, ReminderFilter, ReminderRepository};

use super::super::shared::require_client;

/// Command to schedule a reminder for a client.
#[derive(Debug, Clone)]
pub struct ScheduleReminderCommand {
    pub client_id: ClientId,
    pub kind: ReminderKind,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

/// Handler for scheduling reminders.
pub struct ScheduleReminderHandler {
    reminders: Arc<dyn ReminderRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ScheduleReminderHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { reminders, clients }
    }

    #[tracing::instrument(skip(self, cmd), fields(client_id = %cmd.client_id))]
    pub async fn handle(&self, cmd: ScheduleReminderCommand) -> Result<Reminder, DomainError> {
        let client = require_client(self.clients.as_ref(), &cmd.client_id).await?;
        let reminder = Reminder::schedule(
            ReminderId::new(),
            client.id,
            cmd.kind,
            cmd.channel,
            cmd.message,
            cmd.scheduled_for,
            cmd.now,
        )?;
        self.reminders.create(&reminder).await?;
        tracing::info!(reminder_id = %reminder.id, "reminder scheduled");
        Ok(reminder)
    }
}

/// Handler for marking a pending reminder as sent.
pub struct MarkReminderSentHandler {
    reminders: Arc<dyn ReminderRepository>,
}

impl MarkReminderSentHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>) -> Self {
        Self { reminders }
    }

    pub async fn handle(&self, id: ReminderId, now: DateTime<Utc>) -> Result<Reminder, DomainError> {
        let mut reminder = self.find(&id).await?;
        reminder.mark_sent(now)?;
        self.reminders.update(&reminder).await?;
        Ok(reminder)
    }

    async fn find(&self, id: &ReminderId) -> Result<Reminder, DomainError> {
        self.reminders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ReminderNotFound, "Reminder not found"))
    }
}

/// Handler for cancelling a pending reminder.
pub struct CancelReminderHandler {
    reminders: Arc<dyn ReminderRepository>,
}

impl CancelReminderHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>) -> Self {
        Self { reminders }
    }

    pub async fn handle(&self, id: ReminderId) -> Result<Reminder, DomainError> {
        let mut reminder = self
            .reminders
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ReminderNotFound, "Reminder not found"))?;
        reminder.cancel()?;
        self.reminders.update(&reminder).await?;
        Ok(reminder)
    }
}

/// Query for reminder listings. `due_today` narrows to pending reminders
/// scheduled for the given calendar date.
#[derive(Debug, Clone)]
pub struct ListRemindersQuery {
    pub filter: ReminderFilter,
    pub due_today: Option<NaiveDate>,
}

/// Handler for reminder listings with client names joined in.
pub struct ListRemindersHandler {
    reminders: Arc<dyn ReminderRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl ListRemindersHandler {
    pub fn new(reminders: Arc<dyn ReminderRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { reminders, clients }
    }

    pub async fn handle(
        &self,
        query: ListRemindersQuery,
    ) -> Result<Vec<ReminderListView>, DomainError> {
        let mut filter = query.filter;
        if let Some(today) = query.due_today {
            filter.status = Some(ReminderStatus::Pending);
            filter.scheduled_on = Some(today);
        }
        let reminders = self.reminders.list(&filter).await?;

        let mut views = Vec::with_capacity(reminders.len());
        for reminder in &reminders {
            let client_name = self
                .clients
                .find_by_id(&reminder.client_id)
                .await?
                .map(|c| c.full_name());
            views.push(reminder_list_view(reminder, client_name));
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientStore, InMemoryReminderStore};
    use crate::domain::client::{Client, ClientDraft};
    use chrono::Duration;

    async fn seeded() -> (Arc<InMemoryReminderStore>, Arc<InMemoryClientStore>, ClientId) {
        let clients = Arc::new(InMemoryClientStore::new());
        let client = Client::create(
            ClientId::new(),
            ClientDraft {
                first_name: "Bruno".into(),
                last_name: "Díaz".into(),
                national_id: "27888999".into(),
                email: "bruno@example.com".into(),
                phone: String::new(),
                emergency_contact: String::new(),
                birth_date: NaiveDate::from_ymd_opt(1985, 1, 30).unwrap(),
                address: String::new(),
                notes: String::new(),
            },
            Utc::now(),
        )
        .unwrap();
        clients.create(&client).await.unwrap();
        (Arc::new(InMemoryReminderStore::new()), clients, client.id)
    }

    #[tokio::test]
    async fn sent_reminder_cannot_be_cancelled() {
        let (reminders, clients, client_id) = seeded().await;
        let now = Utc::now();

        let reminder = ScheduleReminderHandler::new(reminders.clone(), clients)
            .handle(ScheduleReminderCommand {
                client_id,
                kind: ReminderKind::Due,
                channel: ReminderChannel::Whatsapp,
                message: "Membership due Friday".into(),
                scheduled_for: now + Duration::days(2),
                now,
            })
            .await
            .unwrap();

        MarkReminderSentHandler::new(reminders.clone())
            .handle(reminder.id, now + Duration::days(2))
            .await
            .unwrap();

        let err = CancelReminderHandler::new(reminders)
            .handle(reminder.id)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn due_today_listing_excludes_other_days_and_terminal_states() {
        let (reminders, clients, client_id) = seeded().await;
        let now = Utc::now();
        let schedule = ScheduleReminderHandler::new(reminders.clone(), clients.clone());

        let today_pending = schedule
            .handle(ScheduleReminderCommand {
                client_id,
                kind: ReminderKind::Due,
                channel: ReminderChannel::Email,
                message: "Due today".into(),
                scheduled_for: now + Duration::hours(2),
                now,
            })
            .await
            .unwrap();
        let today_cancelled = schedule
            .handle(ScheduleReminderCommand {
                client_id,
                kind: ReminderKind::Debt,
                channel: ReminderChannel::Email,
                message: "Also today".into(),
                scheduled_for: now + Duration::hours(3),
                now,
            })
            .await
            .unwrap();
        schedule
            .handle(ScheduleReminderCommand {
                client_id,
                kind: ReminderKind::Renewal,
                channel: ReminderChannel::Whatsapp,
                message: "Next week".into(),
                scheduled_for: now + Duration::days(6),
                now,
            })
            .await
            .unwrap();

        CancelReminderHandler::new(reminders.clone())
            .handle(today_cancelled.id)
            .await
            .unwrap();

        let views = ListRemindersHandler::new(reminders, clients)
            .handle(ListRemindersQuery {
                filter: ReminderFilter::default(),
                due_today: Some(now.date_naive()),
            })
            .await
            .unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, today_pending.id);
        assert_eq!(views[0].client_name.as_deref(), Some("Bruno Díaz"));
    }
}
