use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

// Presentation labels live next to the enums but stay out of their identity;
// the wire names above are what storage and the API exchange.

impl Gender {
    pub fn display_name(self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

impl ActivityLevel {
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Минимальная активность",
            ActivityLevel::LightlyActive => "Небольшая активность",
            ActivityLevel::ModeratelyActive => "Умеренная активность",
            ActivityLevel::VeryActive => "Высокая активность",
            ActivityLevel::ExtraActive => "Экстремальная активность",
        }
    }
}

impl Goal {
    pub fn display_name(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Похудеть",
            Goal::MaintainWeight => "Поддерживать вес",
            Goal::GainWeight => "Набрать вес",
        }
    }
}

/// Anthropometric profile, edited by the profile flow and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub gender: Gender,
    pub height_cm: i32,
    pub weight_kg: f64,
    pub target_weight_kg: Option<f64>,
    pub age: i32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("рост {0} см вне диапазона 50..=300")]
    Height(i32),
    #[error("вес {0} кг вне диапазона 20..=500")]
    Weight(f64),
    #[error("целевой вес {0} кг вне диапазона 20..=500")]
    TargetWeight(f64),
    #[error("возраст {0} вне диапазона 5..=120")]
    Age(i32),
}

impl Profile {
    /// Range check the input flows run before a profile enters the engine.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(50..=300).contains(&self.height_cm) {
            return Err(ProfileError::Height(self.height_cm));
        }
        if !(20.0..=500.0).contains(&self.weight_kg) {
            return Err(ProfileError::Weight(self.weight_kg));
        }
        if let Some(target) = self.target_weight_kg {
            if !(20.0..=500.0).contains(&target) {
                return Err(ProfileError::TargetWeight(target));
            }
        }
        if !(5..=120).contains(&self.age) {
            return Err(ProfileError::Age(self.age));
        }
        Ok(())
    }
}
