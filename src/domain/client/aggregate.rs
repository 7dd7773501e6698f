//! Client aggregate entity.
//!
//! A client is the owner of everything else in the system: fingerprints,
//! reminders, payments, routines, and memberships all hang off a `ClientId`.
//!
//! # Invariants
//!
//! - `national_id` is unique across clients (enforced by the repository)
//! - `email` is unique across clients (enforced by the repository)
//! - Clients are never hard-deleted; the `active` flag is flipped instead

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{calendar, ClientId, ValidationError};

/// National identity document number: exactly eight ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(String);

impl NationalId {
    /// Parses and validates a national ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless the value is exactly eight digits.
    pub fn try_new(value: &str) -> Result<Self, ValidationError> {
        if value.len() != 8 {
            return Err(ValidationError::invalid_format(
                "national_id",
                "must be exactly 8 digits",
            ));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "national_id",
                "must contain only digits",
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered gym client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub national_id: NationalId,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub active: bool,
    pub notes: String,
    pub registered_at: DateTime<Utc>,
}

/// Validated input for creating or updating a client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDraft {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl Client {
    /// Creates a new active client from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names or a malformed national
    /// ID / email. Uniqueness is the repository's responsibility.
    pub fn create(
        id: ClientId,
        draft: ClientDraft,
        registered_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let national_id = NationalId::try_new(&draft.national_id)?;
        validate_name("first_name", &draft.first_name)?;
        validate_name("last_name", &draft.last_name)?;
        validate_email(&draft.email)?;

        Ok(Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            national_id,
            email: draft.email,
            phone: draft.phone,
            emergency_contact: draft.emergency_contact,
            birth_date: draft.birth_date,
            address: draft.address,
            active: true,
            notes: draft.notes,
            registered_at,
        })
    }

    /// Replaces the mutable fields with a new draft. The registration
    /// timestamp and active flag are untouched.
    pub fn apply(&mut self, draft: ClientDraft) -> Result<(), ValidationError> {
        let national_id = NationalId::try_new(&draft.national_id)?;
        validate_name("first_name", &draft.first_name)?;
        validate_name("last_name", &draft.last_name)?;
        validate_email(&draft.email)?;

        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.national_id = national_id;
        self.email = draft.email;
        self.phone = draft.phone;
        self.emergency_contact = draft.emergency_contact;
        self.birth_date = draft.birth_date;
        self.address = draft.address;
        self.notes = draft.notes;
        Ok(())
    }

    /// Soft-delete: marks the client inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Reactivates a previously deactivated client.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// First and last name joined for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Calendar age at `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        calendar::age_on(self.birth_date, today)
    }

    /// Case-insensitive substring match against first OR last name.
    pub fn name_matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.first_name.to_lowercase().contains(&term)
            || self.last_name.to_lowercase().contains(&term)
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    // Light sanity check only; the mail channel is outside this system.
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::invalid_format(
            "email",
            "expected local@domain.tld",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_draft() -> ClientDraft {
        ClientDraft {
            first_name: "Ana".into(),
            last_name: "García".into(),
            national_id: "30123456".into(),
            email: "ana@example.com".into(),
            phone: "1155550000".into(),
            emergency_contact: "1155551111".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            address: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn creates_active_client_from_valid_draft() {
        let client = Client::create(ClientId::new(), sample_draft(), Utc::now()).unwrap();
        assert!(client.active);
        assert_eq!(client.full_name(), "Ana García");
    }

    #[test]
    fn rejects_national_id_with_wrong_length() {
        let mut draft = sample_draft();
        draft.national_id = "1234567".into();
        assert!(Client::create(ClientId::new(), draft, Utc::now()).is_err());
    }

    #[test]
    fn rejects_national_id_with_letters() {
        assert!(NationalId::try_new("3012345A").is_err());
        assert!(NationalId::try_new("30123456").is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut draft = sample_draft();
        draft.email = "not-an-email".into();
        assert!(Client::create(ClientId::new(), draft, Utc::now()).is_err());
    }

    #[test]
    fn name_search_is_case_insensitive_or_across_names() {
        let client = Client::create(ClientId::new(), sample_draft(), Utc::now()).unwrap();
        assert!(client.name_matches("ana"));
        assert!(client.name_matches("GARC"));
        assert!(!client.name_matches("lopez"));
    }

    #[test]
    fn deactivate_and_activate_flip_the_flag_only() {
        let mut client = Client::create(ClientId::new(), sample_draft(), Utc::now()).unwrap();
        let email = client.email.clone();
        client.deactivate();
        assert!(!client.active);
        client.activate();
        assert!(client.active);
        assert_eq!(client.email, email);
    }
}
