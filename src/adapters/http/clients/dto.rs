//! Wire types for the client, fingerprint, and reminder endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::domain::client::{ClientDraft, ReminderChannel, ReminderKind, ReminderStatus};
use crate::domain::foundation::ClientId;
use crate::ports::{ClientFilter, FingerprintFilter, ReminderFilter};

/// Body for creating or updating a client.
#[derive(Debug, Deserialize)]
pub struct ClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub emergency_contact: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl ClientRequest {
    pub fn into_draft(self) -> ClientDraft {
        ClientDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            national_id: self.national_id,
            email: self.email,
            phone: self.phone,
            emergency_contact: self.emergency_contact,
            birth_date: self.birth_date,
            address: self.address,
            notes: self.notes,
        }
    }
}

/// Query string for client listings.
#[derive(Debug, Default, Deserialize)]
pub struct ClientQuery {
    pub active: Option<bool>,
    pub national_id: Option<String>,
    pub search: Option<String>,
    /// Calendar month (1-12) for the birthday listing.
    pub birth_month: Option<u32>,
}

impl ClientQuery {
    pub fn into_filter(self) -> ClientFilter {
        ClientFilter {
            active: self.active,
            national_id: self.national_id,
            search: self.search,
            birth_month: self.birth_month,
        }
    }
}

/// Body for enrolling a fingerprint.
#[derive(Debug, Deserialize)]
pub struct EnrollFingerprintRequest {
    pub client_id: ClientId,
    /// Opaque template bytes from the enrollment device.
    pub template: Vec<u8>,
}

/// Query string for fingerprint listings.
#[derive(Debug, Default, Deserialize)]
pub struct FingerprintQuery {
    pub client_id: Option<ClientId>,
    pub active: Option<bool>,
}

impl FingerprintQuery {
    pub fn into_filter(self) -> FingerprintFilter {
        FingerprintFilter {
            client_id: self.client_id,
            active: self.active,
        }
    }
}

/// Body for scheduling a reminder.
#[derive(Debug, Deserialize)]
pub struct ScheduleReminderRequest {
    pub client_id: ClientId,
    pub kind: ReminderKind,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
}

/// Query string for reminder listings. `due_today=true` narrows to
/// pending reminders scheduled for the current date.
#[derive(Debug, Default, Deserialize)]
pub struct ReminderQuery {
    pub client_id: Option<ClientId>,
    pub status: Option<ReminderStatus>,
    pub kind: Option<ReminderKind>,
    #[serde(default)]
    pub due_today: bool,
}

impl ReminderQuery {
    pub fn into_filter(self) -> ReminderFilter {
        ReminderFilter {
            client_id: self.client_id,
            status: self.status,
            kind: self.kind,
            scheduled_on: None,
        }
    }
}
