#![forbid(unsafe_code)]

//! Core domain model and calculation engine for kcal.
//!
//! This crate provides:
//! - Domain types (profile, weight log, logged activities)
//! - Static lookup tables (activity levels, goals, MET coefficients)
//! - The calculation engine (activity factor, calorie target, weight trend, expenditure)
//! - Profile files, snapshot store and CSV rollup
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod tables;
pub mod activity;
pub mod calories;
pub mod trend;
pub mod expenditure;
pub mod report;
pub mod profile;
pub mod config;
pub mod logging;
pub mod lock;
pub mod store;
pub mod rollup;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use activity::activity_factor;
pub use calories::{basal_metabolic_rate, daily_calorie_target, goal_multiplier};
pub use trend::{weight_trend, WeightTrend};
pub use expenditure::{activity_energy_expenditure, total_energy_expenditure, MetTable};
pub use report::{build_report, ActivityBurn, EnergyReport};
pub use profile::{load_profile, save_profile};
pub use config::Config;
pub use store::{read_snapshots, JsonlProfileStore, ProfileSink, ProfileSnapshot};
