//! Gym Admin - administrative backend for a gym
//!
//! Covers client registration, membership plans and memberships, four-week
//! training routines, payments, expenses, and per-client account statuses.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
