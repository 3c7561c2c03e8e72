use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::parser::ParsedNutrition;

/// Traffic-light quality tag the model attaches to a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Red,
    Yellow,
    Green,
}

impl Rating {
    pub fn from_symbol(symbol: &str) -> Option<Rating> {
        match symbol {
            "🔴" => Some(Rating::Red),
            "🟡" => Some(Rating::Yellow),
            "🟢" => Some(Rating::Green),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rating::Red => "🔴",
            Rating::Yellow => "🟡",
            Rating::Green => "🟢",
        }
    }
}

/// One estimated meal. Nutrient fields are per 100 units of the product,
/// `amount` is the portion size in percent (100 = the portion as described).
///
/// Entries are immutable once parsed except for the saved flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub food_name: String,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    pub fiber: Option<f64>,
    pub amount: i32,
    pub logged_at: OffsetDateTime,
    pub is_saved: bool,
    pub rating: Option<Rating>,
}

/// Outcome of toggling an entry in or out of the diary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiaryChange {
    Added,
    AlreadyAdded,
    Removed,
    AlreadyRemoved,
}

impl FoodLogEntry {
    /// New unsaved entry from a parsed model answer, default portion 100%.
    pub fn from_parsed(parsed: ParsedNutrition, logged_at: OffsetDateTime) -> FoodLogEntry {
        FoodLogEntry {
            id: Uuid::new_v4(),
            food_name: parsed.food,
            calories: parsed.calories,
            proteins: parsed.proteins,
            fats: parsed.fats,
            carbohydrates: parsed.carbohydrates,
            fiber: Some(parsed.fiber),
            amount: 100,
            logged_at,
            is_saved: false,
            rating: Some(parsed.rating),
        }
    }

    /// Flips the saved flag; reports whether anything actually changed so the
    /// caller can word the diary reply.
    pub fn set_saved(&mut self, save: bool) -> DiaryChange {
        match (self.is_saved, save) {
            (false, true) => {
                self.is_saved = true;
                DiaryChange::Added
            }
            (true, true) => DiaryChange::AlreadyAdded,
            (true, false) => {
                self.is_saved = false;
                DiaryChange::Removed
            }
            (false, false) => DiaryChange::AlreadyRemoved,
        }
    }

    pub fn scaled_calories(&self) -> f64 {
        self.scale(self.calories)
    }

    pub fn scaled_proteins(&self) -> f64 {
        self.scale(self.proteins)
    }

    pub fn scaled_fats(&self) -> f64 {
        self.scale(self.fats)
    }

    pub fn scaled_carbohydrates(&self) -> f64 {
        self.scale(self.carbohydrates)
    }

    fn scale(&self, per_100: f64) -> f64 {
        per_100 * f64::from(self.amount) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foodlog::Rating;
    use time::macros::datetime;

    fn entry() -> FoodLogEntry {
        FoodLogEntry {
            id: Uuid::new_v4(),
            food_name: "Овсяная каша".to_string(),
            calories: 200.0,
            proteins: 6.0,
            fats: 4.0,
            carbohydrates: 30.0,
            fiber: Some(2.5),
            amount: 100,
            logged_at: datetime!(2026-08-01 12:00 UTC),
            is_saved: false,
            rating: Some(Rating::Green),
        }
    }

    #[test]
    fn from_parsed_defaults_to_unsaved_full_portion() {
        let parsed = ParsedNutrition {
            food: "Борщ".to_string(),
            calories: 120.0,
            proteins: 4.5,
            fats: 5.0,
            carbohydrates: 10.0,
            fiber: 1.2,
            rating: Rating::Yellow,
        };
        let entry = FoodLogEntry::from_parsed(parsed, datetime!(2026-08-01 09:30 UTC));
        assert_eq!(entry.amount, 100);
        assert!(!entry.is_saved);
        assert_eq!(entry.food_name, "Борщ");
        assert_eq!(entry.fiber, Some(1.2));
        assert_eq!(entry.rating, Some(Rating::Yellow));
    }

    #[test]
    fn portion_scaling_is_linear() {
        let mut e = entry();
        e.amount = 50;
        assert_eq!(e.scaled_calories(), 100.0);
        assert_eq!(e.scaled_proteins(), 3.0);
        e.amount = 150;
        assert_eq!(e.scaled_carbohydrates(), 45.0);
    }

    #[test]
    fn diary_toggle_reports_each_transition() {
        let mut e = entry();
        assert_eq!(e.set_saved(true), DiaryChange::Added);
        assert!(e.is_saved);
        assert_eq!(e.set_saved(true), DiaryChange::AlreadyAdded);
        assert_eq!(e.set_saved(false), DiaryChange::Removed);
        assert!(!e.is_saved);
        assert_eq!(e.set_saved(false), DiaryChange::AlreadyRemoved);
    }

    #[test]
    fn rating_symbols_round_trip() {
        for rating in [Rating::Red, Rating::Yellow, Rating::Green] {
            assert_eq!(Rating::from_symbol(rating.symbol()), Some(rating));
        }
        assert_eq!(Rating::from_symbol("🔵"), None);
    }
}
