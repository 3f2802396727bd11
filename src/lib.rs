//! No-show risk scoring service.
//!
//! A seeded random forest scores appointment features (`model`), scores are tiered and
//! explained with scheduler-facing reasons (`risk`), and an axum router exposes both
//! (`server`). `triage` applies the same scoring to a batch of appointments and
//! builds the scheduler's KPIs and action queue.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod risk;
pub mod server;
pub mod triage;

pub use error::{ConfigError, ScoringError, ServeError};
