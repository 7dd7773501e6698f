//! Use-case handlers, one per command or query. Each handler owns the
//! repository ports it needs behind `Arc<dyn _>` and exposes a single
//! `handle` method.

pub mod client;
pub mod finance;
pub mod membership;
pub mod routine;
pub(crate) mod shared;
