//! Domain layer: aggregates, value objects, and derived-state
//! computations. Pure code; all I/O lives behind the ports.

pub mod client;
pub mod finance;
pub mod foundation;
pub mod membership;
pub mod routine;
