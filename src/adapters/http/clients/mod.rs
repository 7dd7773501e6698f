//! HTTP adapter for client, fingerprint, and reminder endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::ClientHandlers;
pub use routes::client_routes;
