//! Client reminder record and its lifecycle.
//!
//! A reminder is a scheduled notification. This system only tracks the
//! state machine; actual delivery over WhatsApp or email happens elsewhere.
//!
//! # State machine
//!
//! ```text
//! Pending ──mark_sent──▶ Sent
//!    │
//!    └────cancel───────▶ Cancelled
//! ```
//!
//! `Sent` and `Cancelled` are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ReminderId, ValidationError};

/// What the reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Due,
    Debt,
    Renewal,
}

impl ReminderKind {
    /// Human display label; never stored.
    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::Due => "Membership due",
            ReminderKind::Debt => "Outstanding debt",
            ReminderKind::Renewal => "Renewal",
        }
    }
}

/// Delivery channel for the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderChannel {
    Whatsapp,
    Email,
}

impl ReminderChannel {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderChannel::Whatsapp => "WhatsApp",
            ReminderChannel::Email => "Email",
        }
    }
}

/// Lifecycle state of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Cancelled,
}

impl ReminderStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReminderStatus::Sent | ReminderStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderStatus::Pending => "Pending",
            ReminderStatus::Sent => "Sent",
            ReminderStatus::Cancelled => "Cancelled",
        }
    }
}

/// A scheduled client notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub client_id: ClientId,
    pub kind: ReminderKind,
    pub channel: ReminderChannel,
    pub message: String,
    pub scheduled_for: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub status: ReminderStatus,
}

impl Reminder {
    /// Schedules a new pending reminder.
    ///
    /// # Errors
    ///
    /// Rejects an empty message and a scheduled time already in the past.
    pub fn schedule(
        id: ReminderId,
        client_id: ClientId,
        kind: ReminderKind,
        channel: ReminderChannel,
        message: String,
        scheduled_for: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::empty_field("message"));
        }
        if scheduled_for < now {
            return Err(ValidationError::invalid_format(
                "scheduled_for",
                "cannot be in the past",
            ));
        }
        Ok(Self {
            id,
            client_id,
            kind,
            channel,
            message,
            scheduled_for,
            sent_at: None,
            status: ReminderStatus::Pending,
        })
    }

    /// Marks the reminder as sent, recording the send instant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the reminder is pending.
    pub fn mark_sent(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.require_pending("sent")?;
        self.status = ReminderStatus::Sent;
        self.sent_at = Some(now);
        Ok(())
    }

    /// Cancels a pending reminder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the reminder is pending.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.require_pending("cancelled")?;
        self.status = ReminderStatus::Cancelled;
        Ok(())
    }

    fn require_pending(&self, target: &str) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Reminder in state '{}' cannot be {}",
                    self.status.label(),
                    target
                ),
            ));
        }
        Ok(())
    }
}
