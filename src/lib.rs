//! Event registration schema and the per-event occupancy report.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
pub mod usecase;
