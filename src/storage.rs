//! Ports to the embedding application's persistence. The engine owns no
//! schema and performs no I/O of its own; implementations hand it plain
//! values.

use async_trait::async_trait;
use time::Date;
use uuid::Uuid;

use crate::achievements::{AchievementKind, AchievementUnlock};
use crate::foodlog::FoodLogEntry;

/// Read access to the diary.
#[async_trait]
pub trait FoodLogStore: Send + Sync {
    /// Saved entries whose timestamp falls inside the UTC day of `day`
    /// (see [`crate::intake::day_window`]).
    async fn saved_entries_for_day(
        &self,
        user_id: Uuid,
        day: Date,
    ) -> anyhow::Result<Vec<FoodLogEntry>>;

    /// The most recently saved entries, newest first.
    async fn last_saved_entries(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> anyhow::Result<Vec<FoodLogEntry>>;
}

/// Persistence for achievement unlocks. Uniqueness of (user, achievement) is
/// this port's contract: the engine relies on it instead of serializing
/// concurrent evaluations itself.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Every unlock recorded for the user.
    async fn unlocked(&self, user_id: Uuid) -> anyhow::Result<Vec<AchievementUnlock>>;

    /// Records an unlock, or returns the existing record when the pair is
    /// already present. Never creates a duplicate.
    async fn unlock(
        &self,
        user_id: Uuid,
        kind: AchievementKind,
    ) -> anyhow::Result<AchievementUnlock>;
}
