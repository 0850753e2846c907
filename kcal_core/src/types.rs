//! Core domain types for kcal.
//!
//! This module defines the values the calculation engine reads:
//! - Biological sex for the BMR formula
//! - Declared activity level and weight goal
//! - Weight log and logged activity entries
//! - The profile that ties them together

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Biometric Types
// ============================================================================

/// Sex used to pick the BMR constant
///
/// Only two values are defined. Anything else is rejected when parsed, so a
/// `Profile` in hand always has one of these.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(Error::InvalidInput(format!(
                "unsupported sex '{}', expected 'male' or 'female'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_str().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Activity Level and Goal
// ============================================================================

/// Declared day-to-day activity level
///
/// Unknown labels are kept as `Other` and fall back to the default factor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl ActivityLevel {
    /// Key into the activity level table
    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
            ActivityLevel::Other(s) => s.as_str(),
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Other(String::new())
    }
}

impl From<&str> for ActivityLevel {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => ActivityLevel::Low,
            "medium" => ActivityLevel::Medium,
            "high" => ActivityLevel::High,
            other => ActivityLevel::Other(other.to_string()),
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(s: String) -> Self {
        ActivityLevel::from(s.as_str())
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight goal that biases the daily calorie target
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    FastLoseWeight,
    NormalLoseWeight,
    #[default]
    MaintainWeight,
    GainWeight,
    Other(String),
}

impl Goal {
    /// Key into the goal multiplier table
    pub fn as_str(&self) -> &str {
        match self {
            Goal::FastLoseWeight => "fast_lose_weight",
            Goal::NormalLoseWeight => "normal_lose_weight",
            Goal::MaintainWeight => "maintain_weight",
            Goal::GainWeight => "gain_weight",
            Goal::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for Goal {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fast_lose_weight" => Goal::FastLoseWeight,
            "normal_lose_weight" => Goal::NormalLoseWeight,
            // Older profile files carry this spelling
            "maintain_weight" | "maintance_weight" => Goal::MaintainWeight,
            "gain_weight" => Goal::GainWeight,
            other => Goal::Other(other.to_string()),
        }
    }
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        Goal::from(s.as_str())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Log Entries
// ============================================================================

/// Perceived intensity of a logged activity (informational)
///
/// Parsing with `FromStr` is strict. Stored profiles load leniently: any
/// case is accepted and an unknown value becomes `Medium`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Intensity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            other => Err(Error::InvalidInput(format!(
                "unknown intensity '{}', expected low, medium or high",
                other
            ))),
        }
    }
}

impl From<String> for Intensity {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, treating as medium", e);
            Intensity::Medium
        })
    }
}

impl From<Intensity> for String {
    fn from(intensity: Intensity) -> Self {
        intensity.to_string()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        };
        f.write_str(s)
    }
}

/// One weigh-in. The date is an opaque label and is never parsed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightLogEntry {
    pub date: String,
    pub weight_kg: f64,
}

/// One logged exercise activity
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub name: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub intensity: Intensity,
}

// ============================================================================
// Profile
// ============================================================================

/// Everything the calculations read about one person
///
/// `weight_history` is expected in chronological order; nothing here sorts
/// or deduplicates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub steps_per_day: u32,
    #[serde(default)]
    pub cardio_minutes_per_week: u32,
    #[serde(default)]
    pub strength_minutes_per_week: u32,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub weight_history: Vec<WeightLogEntry>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
}
