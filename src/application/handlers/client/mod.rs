//! Client-facing use cases: the client record itself, fingerprint
//! enrollment, and scheduled reminders.

mod clients;
mod fingerprints;
mod reminders;

pub use clients::{
    GetClientHandler, GetClientQuery, ListClientsHandler, ListClientsQuery, RegisterClientCommand,
    RegisterClientHandler, SetClientActiveHandler, UpdateClientCommand, UpdateClientHandler,
};
pub use fingerprints::{
    DeactivateFingerprintHandler, EnrollFingerprintCommand, EnrollFingerprintHandler,
    ListFingerprintsHandler,
};
pub use reminders::{
    CancelReminderHandler, ListRemindersHandler, ListRemindersQuery, MarkReminderSentHandler,
    ScheduleReminderCommand, ScheduleReminderHandler,
};
