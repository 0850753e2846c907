//! Shared fixtures for unit tests.

use crate::{ActivityEntry, ActivityLevel, Goal, Intensity, Profile, Sex, WeightLogEntry};

/// A fully populated profile with mid-range activity volume
pub fn sample_profile() -> Profile {
    Profile {
        name: "Maksim Makarov".into(),
        age: 27,
        weight_kg: 98.0,
        height_cm: 181.0,
        sex: Sex::Male,
        activity_level: ActivityLevel::Medium,
        steps_per_day: 6733,
        cardio_minutes_per_week: 120,
        strength_minutes_per_week: 360,
        goal: Goal::NormalLoseWeight,
        skill_level: "Amateur".into(),
        weight_history: vec![
            WeightLogEntry {
                date: "2025-03-08".into(),
                weight_kg: 99.0,
            },
            WeightLogEntry {
                date: "2025-04-08".into(),
                weight_kg: 97.3,
            },
        ],
        activities: vec![ActivityEntry {
            name: "Gym".into(),
            duration_minutes: 60,
            intensity: Intensity::High,
        }],
    }
}
