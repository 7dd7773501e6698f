//! HTTP adapters - the REST surface over the use-case handlers.
//!
//! Each resource group has its own dto/handlers/routes trio; the
//! top-level router wires them together.

pub mod clients;
pub mod error;
pub mod finance;
pub mod memberships;
pub mod router;
pub mod routines;

pub use router::{api_router, AppRepositories};
