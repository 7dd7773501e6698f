//! Strongly-typed identifier value objects.
//!
//! One newtype per entity so a `RoutineId` can never be passed where a
//! `WeekId` is expected. All IDs are random v4 UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a gym client.
    ClientId
);
entity_id!(
    /// Unique identifier for an enrolled fingerprint.
    FingerprintId
);
entity_id!(
    /// Unique identifier for a client reminder.
    ReminderId
);
entity_id!(
    /// Unique identifier for a membership plan.
    PlanId
);
entity_id!(
    /// Unique identifier for a client membership.
    MembershipId
);
entity_id!(
    /// Unique identifier for a training routine.
    RoutineId
);
entity_id!(
    /// Unique identifier for a routine week.
    WeekId
);
entity_id!(
    /// Unique identifier for a training day.
    TrainingDayId
);
entity_id!(
    /// Unique identifier for an exercise assignment.
    AssignmentId
);
entity_id!(
    /// Unique identifier for an exercise catalog entry.
    CatalogEntryId
);
entity_id!(
    /// Unique identifier for a payment.
    PaymentId
);
entity_id!(
    /// Unique identifier for a fixed monthly expense.
    FixedExpenseId
);
entity_id!(
    /// Unique identifier for a variable expense.
    VariableExpenseId
);
entity_id!(
    /// Unique identifier for a client account status.
    AccountStatusId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        let id = RoutineId::new();
        let parsed: RoutineId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn ids_serialize_as_plain_uuid_strings() {
        let id = ClientId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn distinct_ids_are_unequal() {
        assert_ne!(WeekId::new(), WeekId::new());
    }
}
