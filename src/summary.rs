use time::{Date, Duration};
use tracing::instrument;
use uuid::Uuid;

use crate::intake::{aggregate, average_intake, DaySummary, PeriodSummary};
use crate::profile::Profile;
use crate::prompts::{report_prompt, ReportKind};
use crate::storage::FoodLogStore;
use crate::targets::NutritionTarget;

/// Totals and entries for one UTC day of the diary.
#[instrument(skip(store))]
pub async fn daily_summary<S: FoodLogStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    day: Date,
) -> anyhow::Result<DaySummary> {
    let entries = store.saved_entries_for_day(user_id, day).await?;
    let totals = aggregate(&entries);
    Ok(DaySummary { date: day, totals, entries })
}

/// Per-day totals for `days` consecutive days ending `today`, oldest first,
/// with averages over the days that have any intake. `today` is passed in so
/// the function stays deterministic.
#[instrument(skip(store))]
pub async fn periodic_summary<S: FoodLogStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    days: u32,
    today: Date,
) -> anyhow::Result<PeriodSummary> {
    let mut day_summaries = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let date = today - Duration::days(i64::from(offset));
        day_summaries.push(daily_summary(store, user_id, date).await?);
    }
    day_summaries.sort_by_key(|day| day.date);

    let average = average_intake(&day_summaries);
    Ok(PeriodSummary { days: day_summaries, average })
}

/// Request text for an AI report over the user's recent diary entries, or
/// `None` when the diary is empty and there is nothing to analyze.
#[instrument(skip(store, profile, target))]
pub async fn report_request<S: FoodLogStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    profile: &Profile,
    target: &NutritionTarget,
    kind: ReportKind,
    limit: usize,
) -> anyhow::Result<Option<String>> {
    let entries = store.last_saved_entries(user_id, limit).await?;
    Ok(report_prompt(profile, target, &entries, kind))
}
