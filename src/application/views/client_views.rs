//! View models for client and reminder read operations.
//!
//! Each view is built by an explicit function for one use case; derived
//! fields (full name, age, pending-reminder count) are computed here and
//! never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::client::{Client, Reminder, ReminderChannel, ReminderKind, ReminderStatus};
use crate::domain::foundation::{ClientId, ReminderId};

/// Row in the client list.
#[derive(Debug, Clone, Serialize)]
pub struct ClientListView {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub age: i32,
    pub active: bool,
}

/// Builds the list row for one client.
pub fn client_list_view(client: &Client, today: NaiveDate) -> ClientListView {
    ClientListView {
        id: client.id,
        first_name: client.first_name.clone(),
        last_name: client.last_name.clone(),
        full_name: client.full_name(),
        national_id: client.national_id.to_string(),
        phone: client.phone.clone(),
        email: client.email.clone(),
        age: client.age_on(today),
        active: client.active,
    }
}

/// Full client record plus derived fields for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetailView {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub active: bool,
    pub notes: String,
    pub registered_at: DateTime<Utc>,
    pub age: i32,
    pub pending_reminders: usize,
}

/// Builds the detail view; the caller supplies the pending-reminder count.
pub fn client_detail_view(
    client: &Client,
    pending_reminders: usize,
    today: NaiveDate,
) -> ClientDetailView {
    ClientDetailView {
        id: client.id,
        first_name: client.first_name.clone(),
        last_name: client.last_name.clone(),
        full_name: client.full_name(),
        national_id: client.national_id.to_string(),
        email: client.email.clone(),
        phone: client.phone.clone(),
        emergency_contact: client.emergency_contact.clone(),
        birth_date: client.birth_date,
        address: client.address.clone(),
        active: client.active,
        notes: client.notes.clone(),
        registered_at: client.registered_at,
        age: client.age_on(today),
        pending_reminders,
    }
}

/// Row in the reminder list, with display labels alongside wire tokens.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderListView {
    pub id: ReminderId,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub kind: ReminderKind,
    pub kind_label: &'static str,
    pub channel: ReminderChannel,
    pub channel_label: &'static str,
    pub status: ReminderStatus,
    pub status_label: &'static str,
    pub scheduled_for: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

/// Builds the list row for one reminder; `client_name` is `None` when the
/// owning client record is gone.
pub fn reminder_list_view(reminder: &Reminder, client_name: Option<String>) -> ReminderListView {
    ReminderListView {
        id: reminder.id,
        client_id: reminder.client_id,
        client_name,
        kind: reminder.kind,
        kind_label: reminder.kind.label(),
        channel: reminder.channel,
        channel_label: reminder.channel.label(),
        status: reminder.status,
        status_label: reminder.status.label(),
        scheduled_for: reminder.scheduled_for,
        sent_at: reminder.sent_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientDraft;
    use crate::domain::foundation::ClientId;

    #[test]
    fn list_view_computes_full_name_and_age() {
        let draft = ClientDraft {
            first_name: "Marta".into(),
            last_name: "Suárez".into(),
            national_id: "28999111".into(),
            email: "marta@example.com".into(),
            phone: String::new(),
            emergency_contact: String::new(),
            birth_date: NaiveDate::from_ymd_opt(1992, 9, 20).unwrap(),
            address: String::new(),
            notes: String::new(),
        };
        let client = Client::create(ClientId::new(), draft, Utc::now()).unwrap();
        let view = client_list_view(&client, NaiveDate::from_ymd_opt(2024, 9, 19).unwrap());
        assert_eq!(view.full_name, "Marta Suárez");
        assert_eq!(view.age, 31);
    }
}
