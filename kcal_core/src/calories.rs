//! Daily calorie target.
//!
//! BMR comes from the Mifflin-St Jeor equation, is scaled by the activity
//! factor, then by a goal multiplier, and finally truncated toward zero.

use crate::activity::activity_factor;
use crate::tables::{lookup, DEFAULT_GOAL_MULTIPLIER, GOAL_MULTIPLIERS};
use crate::{Goal, Profile, Sex};

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor)
///
/// Total over any float input; range checks belong to `Profile::validate`.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Multiplier applied for a weight goal; 1.0 for maintenance and unknown goals
pub fn goal_multiplier(goal: &Goal) -> f64 {
    lookup(&GOAL_MULTIPLIERS, goal.as_str(), DEFAULT_GOAL_MULTIPLIER)
}

/// Recommended daily intake in whole kcal
pub fn daily_calorie_target(profile: &Profile) -> i64 {
    let bmr = basal_metabolic_rate(profile);
    let factor = activity_factor(profile);
    let multiplier = goal_multiplier(&profile.goal);

    // `as` truncates toward zero
    let target = (bmr * factor * multiplier) as i64;
    tracing::debug!(
        "Calorie target: bmr {:.2} x factor {:.2} x goal {} = {}",
        bmr,
        factor,
        multiplier,
        target
    );
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_profile;
    use crate::ActivityLevel;

    fn resting_profile(sex: Sex, level: ActivityLevel, goal: Goal) -> Profile {
        let mut profile = sample_profile();
        profile.sex = sex;
        profile.activity_level = level;
        profile.goal = goal;
        profile.steps_per_day = 0;
        profile.cardio_minutes_per_week = 0;
        profile.strength_minutes_per_week = 0;
        profile
    }

    #[test]
    fn test_bmr_by_sex() {
        let male = resting_profile(Sex::Male, ActivityLevel::Low, Goal::MaintainWeight);
        let female = resting_profile(Sex::Female, ActivityLevel::Low, Goal::MaintainWeight);

        assert_eq!(basal_metabolic_rate(&male), 1981.25);
        assert_eq!(basal_metabolic_rate(&female), 1815.25);
    }

    #[test]
    fn test_high_activity_maintenance_target() {
        let profile = resting_profile(Sex::Male, ActivityLevel::High, Goal::MaintainWeight);
        // 1981.25 * 1.75 = 3467.1875
        assert_eq!(daily_calorie_target(&profile), 3467);
    }

    #[test]
    fn test_maintenance_equals_unadjusted_target() {
        for level in [ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High] {
            let profile = resting_profile(Sex::Female, level, Goal::MaintainWeight);
            let unadjusted = (basal_metabolic_rate(&profile) * activity_factor(&profile)) as i64;
            assert_eq!(daily_calorie_target(&profile), unadjusted);
        }
    }

    #[test]
    fn test_goal_multipliers() {
        assert_eq!(goal_multiplier(&Goal::FastLoseWeight), 0.75);
        assert_eq!(goal_multiplier(&Goal::NormalLoseWeight), 0.85);
        assert_eq!(goal_multiplier(&Goal::MaintainWeight), 1.0);
        assert_eq!(goal_multiplier(&Goal::GainWeight), 1.15);
        assert_eq!(goal_multiplier(&Goal::Other("recomp".into())), 1.0);
    }

    #[test]
    fn test_goal_ordering() {
        let target = |goal| {
            daily_calorie_target(&resting_profile(Sex::Male, ActivityLevel::Medium, goal))
        };
        let fast = target(Goal::FastLoseWeight);
        let normal = target(Goal::NormalLoseWeight);
        let maintain = target(Goal::MaintainWeight);
        let gain = target(Goal::GainWeight);

        assert!(fast < normal && normal < maintain && maintain < gain);
    }

    #[test]
    fn test_sample_profile_target() {
        // 1981.25 * 1.65 * 0.85 = 2778.70...
        assert_eq!(daily_calorie_target(&sample_profile()), 2778);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        let profile = resting_profile(Sex::Male, ActivityLevel::Low, Goal::GainWeight);
        // 1981.25 * 1.2 * 1.15 = 2734.125
        let exact = basal_metabolic_rate(&profile) * 1.2 * 1.15;
        assert!(exact.fract() > 0.0);
        assert_eq!(daily_calorie_target(&profile), exact.trunc() as i64);
    }

    #[test]
    fn test_formulas_stay_total_on_nonsense_input() {
        let mut profile = resting_profile(Sex::Female, ActivityLevel::Low, Goal::FastLoseWeight);
        profile.weight_kg = -50.0;
        profile.height_cm = 0.0;
        profile.age = 200;
        // Negative result is returned, not an error
        assert!(daily_calorie_target(&profile) < 0);
    }
}
