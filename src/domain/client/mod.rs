//! Client domain: the client aggregate, fingerprint enrollment, and
//! reminder lifecycle.

mod aggregate;
mod fingerprint;
mod reminder;

pub use aggregate::{Client, ClientDraft, NationalId};
pub use fingerprint::Fingerprint;
pub use reminder::{Reminder, ReminderChannel, ReminderKind, ReminderStatus};
