//! Request texts for the external language model. Building them is pure
//! string work and lives here; the actual API call belongs to the embedding
//! application.

use crate::foodlog::FoodLogEntry;
use crate::profile::Profile;
use crate::targets::NutritionTarget;

/// System message for every nutrition conversation.
pub const SYSTEM_PROMPT: &str = "Ты полезный помощник по питанию.";

/// The fixed reply the model is instructed to give when the message cannot be
/// recognized as food.
pub const REFUSAL_MESSAGE: &str =
    "Не удалось посчитать калории, исходя из сообщения. Попробуйте написать точнее.";

/// Placeholder description when the meal arrives as a photo.
pub const PHOTO_DESCRIPTION: &str = "прикрепленная фотография";

/// True for the model's fixed rejection reply. Only the prefix is checked,
/// matching how the retry fallback shortens the message.
pub fn is_model_refusal(text: &str) -> bool {
    text.trim_start().starts_with("Не удалось")
}

/// Strict-format request for the nutrition estimate of a described meal.
/// The labels here are exactly what [`crate::parser`] extracts.
pub fn nutrition_prompt(product_name: &str) -> String {
    format!(
        "Представь, что ты - профессиональный диетолог, и тебе нужно описать клиенту характеристики пищи.\n\
        Свою еду он описывает так — {product_name}. Опиши точное количество калорий, белков, жиров, углеводов и клетчатки в данном продукте в строгом формате:\n\
        - Еда: то, что описал пользователь, или, если описание не точное (например, нет граммовки, то дополненное, если это уместно)\n\
        - Калории: <число> ккал\n\
        - Белки: <число> г., Жиры: <число> г., Углеводы: <число> г.\n\
        - Клетчатка: <число> г.\n\
        Не пиши диапазоны в калориях, белках, жирах, углеводах и клетчатке, если сомневаешься — пиши среднее значение.\n\
        В конце добавь строго одну из таких строк: \"Рейтинг: 🔴\" или \"Рейтинг: 🟡\" или \"Рейтинг: 🟢\", если считаешь еду вредной, обычной или полезной соответственно.\n\
        Если сообщение не представляется возможным распознать как еду, то напиши строго:\n\
        \"{REFUSAL_MESSAGE}\""
    )
}

/// Variant for photo input: the text part that accompanies the image.
pub fn photo_nutrition_prompt() -> String {
    nutrition_prompt(PHOTO_DESCRIPTION)
}

/// Which angle the AI report takes on the recent diary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Food choices only, macros ignored.
    Quality,
    /// Macros only, food choices ignored.
    Nutrition,
}

/// Analysis request over the user's recent meals against their profile and
/// daily target. `None` when there is nothing to analyze.
pub fn report_prompt(
    profile: &Profile,
    target: &NutritionTarget,
    entries: &[FoodLogEntry],
    kind: ReportKind,
) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let header = match kind {
        ReportKind::Quality => {
            "Ты должен сделать \"Анализ качества питания\", а именно:\n\
            Проанализировать потребляемую мной еду, что стоит добавить в рацион, что убрать.\n\
            Не анализируй КБЖУ, обращай внимание только на потребляемую мной еду."
        }
        ReportKind::Nutrition => {
            "Ты должен сделать \"Анализ КБЖУ\", а именно:\n\
            Проанализировать исключительно КБЖУ, не обращая внимания на саму еду.\n\
            Опиши, каких макронутриентов слишком много или слишком мало, что добавить в рацион, чтобы значения были в норме.\n\
            Не нужно считать суммарное КБЖУ всех моих приемов пищи: это последние приемы пищи, а не съеденное за сутки."
        }
    };

    let profile_line = format!(
        "Рост: {}, Вес: {}, Возраст: {}, Цель: {}",
        profile.height_cm,
        profile.weight_kg,
        profile.age,
        profile.goal.display_name()
    );
    let target_line = format!(
        "Норма калорий: {}, Норма белков: {}, Норма жиров: {}, Норма углеводов: {}",
        target.calories, target.proteins, target.fats, target.carbohydrates
    );
    let log_lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            format!(
                "{}) {}, Калории: {}, Белки: {}, Жиры: {}, Углеводы: {}",
                idx + 1,
                entry.food_name,
                entry.calories,
                entry.proteins,
                entry.fats,
                entry.carbohydrates
            )
        })
        .collect();

    Some(format!(
        "{header}\n\
        Вот мои данные: {profile_line}\n\
        Вот моя суточная норма: {target_line}\n\
        Вот мои последние {count} приемов пищи:\n\
        {logs}\n\n\
        Тебе нужно дать емкий ответ, не слишком длинный, без приветствий.\n\
        Представь что ты нутрициолог, и к тебе пришел клиент c этими данными.\n\
        Не нужно дублировать информацию, которую я тебе отправил, просто сделай свою задачу.",
        count = entries.len(),
        logs = log_lines.join("\n"),
    ))
}
