//! Membership domain: plan products and client membership lifecycle.

mod aggregate;
mod plan;
mod status;

pub use aggregate::Membership;
pub use plan::{Plan, WeeklyFrequency};
pub use status::MembershipStatus;
