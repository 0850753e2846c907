//! Energy expenditure for logged activities.
//!
//! Calories burned are `coefficient * weight_kg * minutes / 60`, where the
//! coefficient is a MET-like rate looked up by activity name. The intensity
//! recorded on an entry does not take part in the lookup.

use crate::tables::{DEFAULT_MET_COEFFICIENT, MET_COEFFICIENTS};
use crate::ActivityEntry;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN_TABLE: Lazy<MetTable> = Lazy::new(MetTable::builtin);

/// Coefficient table with a fallback for unknown activities
#[derive(Clone, Debug, PartialEq)]
pub struct MetTable {
    coefficients: HashMap<String, f64>,
    default_coefficient: f64,
}

impl Default for MetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MetTable {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            coefficients: MET_COEFFICIENTS
                .iter()
                .map(|(name, met)| (name.to_string(), *met))
                .collect(),
            default_coefficient: DEFAULT_MET_COEFFICIENT,
        }
    }

    /// Layer extra or replacement coefficients over this table
    pub fn with_overrides(mut self, overrides: &HashMap<String, f64>) -> Self {
        for (name, met) in overrides {
            tracing::debug!("MET override: {} = {}", name, met);
            self.coefficients.insert(name.clone(), *met);
        }
        self
    }

    /// Coefficient for an activity name, or the fallback
    pub fn coefficient(&self, name: &str) -> f64 {
        self.coefficients
            .get(name)
            .copied()
            .unwrap_or(self.default_coefficient)
    }

    /// Whether `name` has its own entry
    pub fn contains(&self, name: &str) -> bool {
        self.coefficients.contains_key(name)
    }

    /// Calories burned by one entry at the given body weight
    pub fn expenditure(&self, entry: &ActivityEntry, weight_kg: f64) -> f64 {
        let met = self.coefficient(&entry.name);
        met * weight_kg * f64::from(entry.duration_minutes) / 60.0
    }

    /// Sum of `expenditure` over all entries, at one reference weight
    pub fn total(&self, activities: &[ActivityEntry], weight_kg: f64) -> f64 {
        activities
            .iter()
            .map(|entry| self.expenditure(entry, weight_kg))
            .sum()
    }
}

/// Calories burned by one entry, using the built-in table
pub fn activity_energy_expenditure(entry: &ActivityEntry, weight_kg: f64) -> f64 {
    BUILTIN_TABLE.expenditure(entry, weight_kg)
}

/// Total calories burned across entries, using the built-in table
pub fn total_energy_expenditure(activities: &[ActivityEntry], weight_kg: f64) -> f64 {
    BUILTIN_TABLE.total(activities, weight_kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Intensity;

    fn entry(name: &str, minutes: u32, intensity: Intensity) -> ActivityEntry {
        ActivityEntry {
            name: name.into(),
            duration_minutes: minutes,
            intensity,
        }
    }

    #[test]
    fn test_gym_hour() {
        let burned = activity_energy_expenditure(&entry("Gym", 60, Intensity::High), 98.0);
        assert_eq!(burned, 490.0);
    }

    #[test]
    fn test_unknown_activity_uses_default() {
        let burned = activity_energy_expenditure(&entry("Rowing", 30, Intensity::Medium), 80.0);
        assert_eq!(burned, 3.0 * 80.0 * 30.0 / 60.0);
    }

    #[test]
    fn test_intensity_does_not_change_result() {
        let low = activity_energy_expenditure(&entry("Running", 45, Intensity::Low), 70.0);
        let high = activity_energy_expenditure(&entry("Running", 45, Intensity::High), 70.0);
        assert_eq!(low, high);
    }

    #[test]
    fn test_zero_duration() {
        let burned = activity_energy_expenditure(&entry("Running", 0, Intensity::High), 70.0);
        assert_eq!(burned, 0.0);
    }

    #[test]
    fn test_total_matches_sum_of_parts() {
        let activities = vec![
            entry("Gym", 60, Intensity::High),
            entry("Walking", 40, Intensity::Low),
            entry("Swiming", 25, Intensity::Medium),
            entry("Climbing", 90, Intensity::High),
        ];
        let weight = 72.5;

        let sum: f64 = activities
            .iter()
            .map(|a| activity_energy_expenditure(a, weight))
            .sum();
        assert_eq!(total_energy_expenditure(&activities, weight), sum);
        assert_eq!(total_energy_expenditure(&[], weight), 0.0);
    }

    #[test]
    fn test_builtin_table_agrees_with_free_functions() {
        let table = MetTable::builtin();
        let activities = vec![
            entry("Running", 30, Intensity::High),
            entry("Yoga", 50, Intensity::Low),
        ];
        for a in &activities {
            assert_eq!(
                table.expenditure(a, 65.0),
                activity_energy_expenditure(a, 65.0)
            );
        }
        assert_eq!(
            table.total(&activities, 65.0),
            total_energy_expenditure(&activities, 65.0)
        );
    }

    #[test]
    fn test_overrides() {
        let overrides = HashMap::from([
            ("Cycling".to_string(), 7.5),
            ("Gym".to_string(), 6.0),
        ]);
        let table = MetTable::builtin().with_overrides(&overrides);

        assert_eq!(table.coefficient("Cycling"), 7.5);
        assert_eq!(table.coefficient("Gym"), 6.0);
        assert_eq!(table.coefficient("Running"), 9.8);
        assert_eq!(table.coefficient("Unknown"), DEFAULT_MET_COEFFICIENT);
        assert!(table.contains("Cycling"));
        assert!(!table.contains("Unknown"));
    }
}
