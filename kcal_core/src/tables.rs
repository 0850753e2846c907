//! Static lookup tables used by the calculation engine.
//!
//! Each table is built once and never mutated. Lookups go through
//! [`lookup`], which returns the caller's fallback for a missing key.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Factor used when the declared activity level is not in the table
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.2;

/// Goal multiplier for maintenance and unknown goals
pub const DEFAULT_GOAL_MULTIPLIER: f64 = 1.0;

/// Coefficient for activities missing from the MET table
pub const DEFAULT_MET_COEFFICIENT: f64 = 3.0;

/// Base activity factor per declared level
pub static ACTIVITY_LEVEL_FACTORS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("low", 1.2), // sedentary
        ("medium", 1.55), // 3-4 workouts per week
        ("high", 1.75), // 5-7 workouts per week
    ])
});

/// Calorie target multiplier per weight goal
pub static GOAL_MULTIPLIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("fast_lose_weight", 0.75),
        ("normal_lose_weight", 0.85),
        ("maintain_weight", 1.0),
        ("gain_weight", 1.15),
    ])
});

/// MET-like coefficient per activity name, matched exactly
pub static MET_COEFFICIENTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Running", 9.8),
        ("Walking", 3.5),
        ("Swimming", 6.0),
        // Misspelled key kept so existing activity logs still match
        ("Swiming", 6.0),
        ("Gym", 5.0),
    ])
});

/// Look up `key`, returning `fallback` when it is absent
pub fn lookup(table: &HashMap<&'static str, f64>, key: &str, fallback: f64) -> f64 {
    table.get(key).copied().unwrap_or(fallback)
}
