use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One point of a user's weight history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub recorded_at: OffsetDateTime,
    pub weight_kg: f64,
}

/// The earliest recorded weight: the baseline that progress achievements
/// measure against. Tolerates unsorted history.
pub fn initial_weight(history: &[WeightRecord]) -> Option<f64> {
    history
        .iter()
        .min_by_key(|record| record.recorded_at)
        .map(|record| record.weight_kg)
}
