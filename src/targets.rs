use serde::{Deserialize, Serialize};

use crate::intake::round2;
use crate::profile::{ActivityLevel, Gender, Goal, Profile};

/// Daily calorie and macro targets, one per profile, recomputed whenever the
/// profile changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

/// Derives the daily target from a profile: Mifflin-St Jeor BMR, activity
/// multiplier, goal adjustment, then a per-kg macro split with carbohydrates
/// filling the calorie remainder.
///
/// The carbohydrate remainder is not clamped: extreme weight/calorie
/// combinations yield a negative carbohydrate target.
pub fn compute_target(profile: &Profile) -> NutritionTarget {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * activity_multiplier(profile.activity_level);
    let calories = adjust_for_goal(tdee, profile.goal);

    let (protein_per_kg, fat_per_kg) = macro_split(profile.goal);
    let proteins = protein_per_kg * profile.weight_kg;
    let fats = fat_per_kg * profile.weight_kg;
    let carbohydrates = (calories - (proteins * 4.0 + fats * 9.0)) / 4.0;

    NutritionTarget {
        calories: round2(calories),
        proteins: round2(proteins),
        fats: round2(fats),
        carbohydrates: round2(carbohydrates),
    }
}

fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * f64::from(profile.height_cm)
        - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

fn adjust_for_goal(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => tdee * 0.85,
        Goal::MaintainWeight => tdee,
        Goal::GainWeight => tdee * 1.15,
    }
}

/// Grams of protein and fat per kg of bodyweight, by goal.
fn macro_split(goal: Goal) -> (f64, f64) {
    match goal {
        // чуть больше белка на дефиците, жиры по минимуму
        Goal::LoseWeight => (1.4, 0.8),
        Goal::MaintainWeight => (1.2, 1.0),
        Goal::GainWeight => (1.6, 1.2),
    }
}
