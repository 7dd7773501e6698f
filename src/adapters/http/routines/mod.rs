//! HTTP adapter for catalog and routine endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::RoutineHandlers;
pub use routes::routine_routes;
