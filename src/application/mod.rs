//! Application layer: use-case handlers and derived views. Handlers
//! orchestrate domain entities through the repository ports; views turn
//! them into read models.

pub mod handlers;
pub mod views;
