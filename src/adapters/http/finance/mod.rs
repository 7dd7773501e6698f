//! HTTP adapter for payment, expense, and account status endpoints.

mod dto;
mod handlers;
mod routes;

pub use handlers::FinanceHandlers;
pub use routes::finance_routes;
