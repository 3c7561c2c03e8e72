use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

use crate::foodlog::FoodLogEntry;

/// Summed macros over a set of entries, each scaled by its portion size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntakeTotals {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

/// One day of the diary: the totals plus the entries that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: Date,
    pub totals: IntakeTotals,
    pub entries: Vec<FoodLogEntry>,
}

/// Consecutive days of the diary, oldest first, with averages taken over the
/// days that have any logged intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub days: Vec<DaySummary>,
    pub average: IntakeTotals,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sums portion-scaled macros over the given entries.
///
/// The caller filters to saved entries in the wanted time window; rounding is
/// applied once to the final totals, not per entry.
pub fn aggregate(entries: &[FoodLogEntry]) -> IntakeTotals {
    let mut totals = IntakeTotals::default();
    for entry in entries {
        totals.calories += entry.scaled_calories();
        totals.proteins += entry.scaled_proteins();
        totals.fats += entry.scaled_fats();
        totals.carbohydrates += entry.scaled_carbohydrates();
    }
    IntakeTotals {
        calories: round2(totals.calories),
        proteins: round2(totals.proteins),
        fats: round2(totals.fats),
        carbohydrates: round2(totals.carbohydrates),
    }
}

/// Mean of the per-day totals over days with calories > 0. Days without any
/// intake are skipped, not averaged in as zeros; no day with intake at all
/// gives all-zero averages.
pub fn average_intake(days: &[DaySummary]) -> IntakeTotals {
    let mut sum = IntakeTotals::default();
    let mut counted = 0u32;
    for day in days {
        if day.totals.calories > 0.0 {
            counted += 1;
            sum.calories += day.totals.calories;
            sum.proteins += day.totals.proteins;
            sum.fats += day.totals.fats;
            sum.carbohydrates += day.totals.carbohydrates;
        }
    }
    if counted == 0 {
        return IntakeTotals::default();
    }
    let n = f64::from(counted);
    IntakeTotals {
        calories: sum.calories / n,
        proteins: sum.proteins / n,
        fats: sum.fats / n,
        carbohydrates: sum.carbohydrates / n,
    }
}

/// Half-open UTC day window: [midnight, midnight + 24h).
pub fn day_window(date: Date) -> (OffsetDateTime, OffsetDateTime) {
    let start = date.midnight().assume_utc();
    (start, start + Duration::days(1))
}
