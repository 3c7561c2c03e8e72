use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::foodlog::Rating;

/// Structured nutrition estimate extracted from the model's answer. Values
/// are per 100 units of the product, unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedNutrition {
    pub food: String,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
    pub rating: Rating,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// At least one expected field is missing. Most of the time the model has
    /// answered with its user-facing rejection instead of the strict format,
    /// so the raw text is carried verbatim for the caller to show as-is.
    #[error("{0}")]
    Unrecognized(String),
    /// A rating marker is present but its symbol is not one of 🔴/🟡/🟢.
    /// Distinct from the missing-field case so the caller can retry upstream.
    #[error("некорректное значение рейтинга: {0}")]
    InvalidRating(String),
    #[error("не удалось разобрать число: {0}")]
    BadNumber(String),
}

// Маркеры фиксированы промптом; числа принимают запятую или точку, а
// диапазон после тире отбрасывается.
lazy_static! {
    static ref FOOD_RE: Regex = Regex::new(r"Еда:\s*(.*)").unwrap();
    static ref CALORIES_RE: Regex = nutrient_re("Калории", "ккал");
    static ref PROTEINS_RE: Regex = nutrient_re("Белки", "г");
    static ref FATS_RE: Regex = nutrient_re("Жиры", "г");
    static ref CARBS_RE: Regex = nutrient_re("Углеводы", "г");
    static ref FIBER_RE: Regex = nutrient_re("Клетчатка", "г");
    static ref RATING_RE: Regex = Regex::new(r"Рейтинг:\s*(\S+)").unwrap();
}

fn nutrient_re(label: &str, unit: &str) -> Regex {
    Regex::new(&format!(
        r"{label}:\s*(\d+[.,]?\d*)(?:\s*[-–—]\s*\d+[.,]?\d*)?\s*{unit}"
    ))
    .unwrap()
}

/// Extracts the labeled nutrition fields from the model's answer.
pub fn parse_nutrition(raw: &str) -> Result<ParsedNutrition, ParseError> {
    let food = FOOD_RE.captures(raw).map(|c| c[1].trim().to_string());
    let calories = capture(&CALORIES_RE, raw);
    let proteins = capture(&PROTEINS_RE, raw);
    let fats = capture(&FATS_RE, raw);
    let carbohydrates = capture(&CARBS_RE, raw);
    let fiber = capture(&FIBER_RE, raw);
    let rating = capture(&RATING_RE, raw);

    let (
        Some(food),
        Some(calories),
        Some(proteins),
        Some(fats),
        Some(carbohydrates),
        Some(fiber),
        Some(rating),
    ) = (food, calories, proteins, fats, carbohydrates, fiber, rating)
    else {
        debug!("nutrition answer did not match the expected format");
        return Err(ParseError::Unrecognized(raw.to_string()));
    };

    let rating =
        Rating::from_symbol(&rating).ok_or_else(|| ParseError::InvalidRating(rating.clone()))?;

    Ok(ParsedNutrition {
        food,
        calories: parse_decimal(&calories)?,
        proteins: parse_decimal(&proteins)?,
        fats: parse_decimal(&fats)?,
        carbohydrates: parse_decimal(&carbohydrates)?,
        fiber: parse_decimal(&fiber)?,
        rating,
    })
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].to_string())
}

fn parse_decimal(text: &str) -> Result<f64, ParseError> {
    text.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ParseError::BadNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "- Еда: Овсяная каша с бананом\n\
        - Калории: 245,5 ккал\n\
        - Белки: 7.2 г., Жиры: 4,1 г., Углеводы: 45 г.\n\
        - Клетчатка: 3,8 г.\n\
        Рейтинг: 🟢";

    #[test]
    fn parses_a_well_formed_answer() {
        let parsed = parse_nutrition(WELL_FORMED).expect("answer should parse");
        assert_eq!(parsed.food, "Овсяная каша с бананом");
        assert_eq!(parsed.calories, 245.5);
        assert_eq!(parsed.proteins, 7.2);
        assert_eq!(parsed.fats, 4.1);
        assert_eq!(parsed.carbohydrates, 45.0);
        assert_eq!(parsed.fiber, 3.8);
        assert_eq!(parsed.rating, Rating::Green);
    }

    #[test]
    fn range_qualifiers_keep_the_first_number() {
        let text = "Еда: Плов\nКалории: 250–300 ккал\nБелки: 8 - 10 г\n\
            Жиры: 12,5 г\nУглеводы: 30 — 35 г\nКлетчатка: 1 г\nРейтинг: 🟡";
        let parsed = parse_nutrition(text).expect("ranges should be tolerated");
        assert_eq!(parsed.calories, 250.0);
        assert_eq!(parsed.proteins, 8.0);
        assert_eq!(parsed.carbohydrates, 30.0);
    }

    #[test]
    fn any_missing_field_surfaces_the_raw_text() {
        let markers = ["Еда:", "Калории:", "Белки:", "Жиры:", "Углеводы:", "Клетчатка:", "Рейтинг:"];
        for marker in markers {
            let broken = WELL_FORMED.replace(marker, "Поле:");
            match parse_nutrition(&broken) {
                Err(ParseError::Unrecognized(raw)) => assert_eq!(raw, broken),
                other => panic!("expected Unrecognized for dropped {marker}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejection_message_comes_back_verbatim() {
        let rejection = "Не удалось посчитать калории, исходя из сообщения. Попробуйте написать точнее.";
        let err = parse_nutrition(rejection).unwrap_err();
        assert_eq!(err, ParseError::Unrecognized(rejection.to_string()));
        assert_eq!(err.to_string(), rejection);
    }

    #[test]
    fn unknown_rating_symbol_is_a_distinct_error() {
        let text = WELL_FORMED.replace('🟢', "🔵");
        assert_eq!(
            parse_nutrition(&text).unwrap_err(),
            ParseError::InvalidRating("🔵".to_string())
        );
    }

    #[test]
    fn food_description_is_trimmed() {
        let text = WELL_FORMED.replace("Еда: Овсяная каша с бананом", "Еда:   Гречка с курицей  ");
        let parsed = parse_nutrition(&text).expect("answer should parse");
        assert_eq!(parsed.food, "Гречка с курицей");
    }
}
