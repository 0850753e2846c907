//! Activity factor calculation.
//!
//! The factor scales BMR for daily movement. It starts from the declared
//! activity level and is nudged by measured volume:
//! - Steps per day: below 5000 costs 0.1, above 10000 earns 0.5
//! - Cardio and strength minutes per week: below 60 costs 0.1, above 180 earns 0.1
//!
//! A profile with no measured volume at all keeps the declared base factor.

use crate::tables::{lookup, ACTIVITY_LEVEL_FACTORS, DEFAULT_ACTIVITY_FACTOR};
use crate::Profile;

/// Lowest factor the adjustments can produce
pub const MIN_ACTIVITY_FACTOR: f64 = 1.1;

/// Highest factor the adjustments can produce
pub const MAX_ACTIVITY_FACTOR: f64 = 2.0;

const LOW_STEPS: u32 = 5000;
const HIGH_STEPS: u32 = 10_000;
const STEPS_PENALTY: f64 = 0.1;
const STEPS_BONUS: f64 = 0.5;

const LOW_WEEKLY_MINUTES: u32 = 60;
const HIGH_WEEKLY_MINUTES: u32 = 180;
const WEEKLY_MINUTES_ADJUSTMENT: f64 = 0.1;

/// Compute the activity factor for a profile
///
/// Always lies in `[MIN_ACTIVITY_FACTOR, MAX_ACTIVITY_FACTOR]`.
pub fn activity_factor(profile: &Profile) -> f64 {
    let base = lookup(
        &ACTIVITY_LEVEL_FACTORS,
        profile.activity_level.as_str(),
        DEFAULT_ACTIVITY_FACTOR,
    );

    if profile.steps_per_day == 0
        && profile.cardio_minutes_per_week == 0
        && profile.strength_minutes_per_week == 0
    {
        tracing::debug!("No measured activity, using base factor {}", base);
        return base;
    }

    let factor = base
        + steps_adjustment(profile.steps_per_day)
        + weekly_minutes_adjustment(profile.cardio_minutes_per_week)
        + weekly_minutes_adjustment(profile.strength_minutes_per_week);

    let clamped = factor.clamp(MIN_ACTIVITY_FACTOR, MAX_ACTIVITY_FACTOR);
    tracing::debug!(
        "Activity factor for level '{}': base {} -> {}",
        profile.activity_level,
        base,
        clamped
    );
    clamped
}

fn steps_adjustment(steps_per_day: u32) -> f64 {
    if steps_per_day < LOW_STEPS {
        -STEPS_PENALTY
    } else if steps_per_day > HIGH_STEPS {
        STEPS_BONUS
    } else {
        0.0
    }
}

fn weekly_minutes_adjustment(minutes: u32) -> f64 {
    if minutes < LOW_WEEKLY_MINUTES {
        -WEEKLY_MINUTES_ADJUSTMENT
    } else if minutes > HIGH_WEEKLY_MINUTES {
        WEEKLY_MINUTES_ADJUSTMENT
    } else {
        0.0
    }
}
