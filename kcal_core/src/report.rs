//! Energy report assembly.
//!
//! Gathers every calculation for one profile into a single value that the
//! presentation layer can print or serialize.

use crate::activity::activity_factor;
use crate::calories::{basal_metabolic_rate, daily_calorie_target, goal_multiplier};
use crate::expenditure::MetTable;
use crate::trend::{weight_trend, WeightTrend};
use crate::{Intensity, Profile};
use serde::Serialize;

/// Calories burned by one logged activity
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ActivityBurn {
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub coefficient: f64,
    pub kcal: f64,
}

/// Results of all calculations for one profile
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EnergyReport {
    pub name: String,
    pub bmr: f64,
    pub activity_factor: f64,
    pub goal_multiplier: f64,
    pub daily_calories: i64,
    pub weight_trend: WeightTrend,
    pub activities: Vec<ActivityBurn>,
    pub total_burned_kcal: f64,
}

/// Build the report; every burn uses `profile.weight_kg` as reference weight
pub fn build_report(profile: &Profile, met_table: &MetTable) -> EnergyReport {
    let weight = profile.weight_kg;

    let activities: Vec<ActivityBurn> = profile
        .activities
        .iter()
        .map(|entry| ActivityBurn {
            name: entry.name.clone(),
            duration_minutes: entry.duration_minutes,
            intensity: entry.intensity,
            coefficient: met_table.coefficient(&entry.name),
            kcal: met_table.expenditure(entry, weight),
        })
        .collect();

    let report = EnergyReport {
        name: profile.name.clone(),
        bmr: basal_metabolic_rate(profile),
        activity_factor: activity_factor(profile),
        goal_multiplier: goal_multiplier(&profile.goal),
        daily_calories: daily_calorie_target(profile),
        weight_trend: weight_trend(&profile.weight_history),
        total_burned_kcal: met_table.total(&profile.activities, weight),
        activities,
    };

    tracing::info!(
        "Built report for {}: {} kcal/day, {} activities",
        report.name,
        report.daily_calories,
        report.activities.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use crate::test_support::sample_profile;
    use crate::ActivityEntry;

    #[test]
    fn test_sample_report() {
        logging::init_test();
        let report = build_report(&sample_profile(), &MetTable::builtin());

        assert_eq!(report.name, "Maksim Makarov");
        assert_eq!(report.bmr, 1981.25);
        assert!((report.activity_factor - 1.65).abs() < 1e-9);
        assert_eq!(report.goal_multiplier, 0.85);
        assert_eq!(report.daily_calories, 2778);
        assert!(matches!(report.weight_trend, WeightTrend::Lost(kg) if (kg - 1.7).abs() < 1e-9));

        assert_eq!(report.activities.len(), 1);
        assert_eq!(report.activities[0].coefficient, 5.0);
        assert_eq!(report.activities[0].kcal, 490.0);
        assert_eq!(report.total_burned_kcal, 490.0);
    }

    #[test]
    fn test_total_is_sum_of_burns() {
        let mut profile = sample_profile();
        profile.activities.push(ActivityEntry {
            name: "Running".into(),
            duration_minutes: 25,
            intensity: Intensity::Medium,
        });
        profile.activities.push(ActivityEntry {
            name: "Dancing".into(),
            duration_minutes: 45,
            intensity: Intensity::Low,
        });

        let report = build_report(&profile, &MetTable::builtin());
        let sum: f64 = report.activities.iter().map(|a| a.kcal).sum();
        assert_eq!(report.total_burned_kcal, sum);
        assert_eq!(report.activities[2].coefficient, 3.0);
    }

    #[test]
    fn test_reports_are_consistent_across_threads() {
        let profile = sample_profile();
        let table = MetTable::builtin();
        let expected = build_report(&profile, &table);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| build_report(&profile, &table)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&sample_profile(), &MetTable::builtin());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["daily_calories"], 2778);
        assert_eq!(value["weight_trend"]["trend"], "lost");
        assert_eq!(value["activities"][0]["intensity"], "high");
    }
}
