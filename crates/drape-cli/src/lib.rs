//! # drape-cli
//!
//! Library half of the `drape` binary: canned scenarios, settings
//! loading and the run summary, kept here so they can be tested.

pub mod config;
pub mod scenarios;
pub mod summary;

pub use config::load_settings;
pub use scenarios::{Scenario, ScenarioKind};
pub use summary::RunSummary;
