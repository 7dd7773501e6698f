//! Membership use cases: plans and the memberships sold on them.

mod create_membership;
mod memberships;
mod plans;

pub use create_membership::{CreateMembershipCommand, CreateMembershipHandler};
pub use memberships::{
    ListMembershipsHandler, ListMembershipsQuery, SetMembershipActiveHandler, UpcomingDuesHandler,
    UpcomingDuesQuery,
};
pub use plans::{
    CreatePlanCommand, CreatePlanHandler, GetPlanHandler, GetPlanQuery, ListPlansHandler,
    ListPlansQuery, SetPlanActiveHandler, UpdatePlanCommand, UpdatePlanHandler,
};
