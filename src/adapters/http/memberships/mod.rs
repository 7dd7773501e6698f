//! HTTP adapter for plan and membership endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::MembershipHandlers;
pub use routes::membership_routes;
