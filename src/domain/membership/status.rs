//! Derived membership status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a membership. Always derived from the active flag
/// and the date range at read time; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Expiring,
    Expired,
    Suspended,
}

impl MembershipStatus {
    /// Human display label; computed in views, never stored.
    pub fn label(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "Active",
            MembershipStatus::Expiring => "Expiring soon",
            MembershipStatus::Expired => "Expired",
            MembershipStatus::Suspended => "Suspended",
        }
    }
}
