use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::profile::Profile;
use crate::storage::AchievementStore;
use crate::weight::{initial_weight, WeightRecord};

/// The achievements the bot awards. Matched exhaustively everywhere, so a new
/// variant does not compile until its predicate is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    #[serde(rename = "start")]
    Started,
    #[serde(rename = "discipline")]
    Discipline,
    #[serde(rename = "halfway")]
    Halfway,
    #[serde(rename = "winner")]
    Winner,
}

impl AchievementKind {
    /// Stable string key used by storage and the API.
    pub fn code(self) -> &'static str {
        match self {
            AchievementKind::Started => "start",
            AchievementKind::Discipline => "discipline",
            AchievementKind::Halfway => "halfway",
            AchievementKind::Winner => "winner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub kind: AchievementKind,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
}

/// The catalog in its canonical order.
pub fn default_definitions() -> Vec<AchievementDefinition> {
    let def = |kind, name: &str, description: &str| AchievementDefinition {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        icon_url: None,
    };
    vec![
        def(AchievementKind::Started, "Начало положено", "Первая запись в дневнике питания"),
        def(AchievementKind::Discipline, "Дисциплина", "Записи в дневнике 7 дней подряд"),
        def(AchievementKind::Halfway, "Полпути", "Пройдена половина пути к целевому весу"),
        def(AchievementKind::Winner, "Победитель", "Целевой вес достигнут"),
    ]
}

/// One persisted unlock. At most one exists per (user, achievement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub user_id: Uuid,
    pub kind: AchievementKind,
    pub unlocked_at: OffsetDateTime,
}

/// Unlock state of one defined achievement, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub unlocked_at: Option<OffsetDateTime>,
}

/// Everything the predicates look at, fetched up front by the caller.
#[derive(Debug, Clone, Default)]
pub struct UserHistory {
    /// Number of entries ever saved to the diary.
    pub saved_log_count: u64,
    /// Distinct dates with at least one saved entry, any order.
    pub log_dates: Vec<Date>,
    pub profile: Option<Profile>,
    pub weight_history: Vec<WeightRecord>,
}

pub fn evaluate(kind: AchievementKind, history: &UserHistory) -> bool {
    match kind {
        AchievementKind::Started => has_started(history),
        AchievementKind::Discipline => has_discipline(history),
        AchievementKind::Halfway => has_halfway(history),
        AchievementKind::Winner => has_winner(history),
    }
}

/// At least one entry ever saved to the diary.
pub fn has_started(history: &UserHistory) -> bool {
    history.saved_log_count > 0
}

/// Seven consecutive calendar dates with saved entries. Every 7-wide window
/// of the sorted dates is checked: an old streak still counts.
pub fn has_discipline(history: &UserHistory) -> bool {
    let mut dates = history.log_dates.clone();
    dates.sort_unstable();
    dates.dedup();
    if dates.len() < 7 {
        return false;
    }
    dates.windows(7).any(is_consecutive)
}

fn is_consecutive(window: &[Date]) -> bool {
    window
        .windows(2)
        .all(|pair| pair[1] - pair[0] == Duration::days(1))
}

/// At least half of the distance from the initial to the target weight is
/// covered, in the direction the user is moving.
pub fn has_halfway(history: &UserHistory) -> bool {
    let Some((initial, current, target)) = weight_course(history) else {
        return false;
    };
    if (initial - target).abs() < 0.01 {
        // нет осмысленной дистанции
        return false;
    }
    if initial > target {
        initial - current >= 0.5 * (initial - target)
    } else {
        current - initial >= 0.5 * (target - initial)
    }
}

/// The target weight is reached or passed in the right direction.
pub fn has_winner(history: &UserHistory) -> bool {
    let Some((initial, current, target)) = weight_course(history) else {
        return false;
    };
    if initial > target {
        current <= target
    } else if initial < target {
        current >= target
    } else {
        false
    }
}

/// (initial, current, target) weights, or `None` while the prerequisites are
/// missing. Absent target weight or empty weight history is a legitimate
/// "not applicable yet" state, never an error.
fn weight_course(history: &UserHistory) -> Option<(f64, f64, f64)> {
    let profile = history.profile.as_ref()?;
    let target = profile.target_weight_kg?;
    let initial = initial_weight(&history.weight_history)?;
    Some((initial, profile.weight_kg, target))
}

/// Evaluates every predicate against the snapshot and persists the unlocks
/// that newly qualify. Unlocking is terminal: already-unlocked achievements
/// are never re-evaluated, so repeated calls return the same timestamps.
///
/// The returned statuses follow the definitions' order, one per definition.
#[instrument(skip(store, definitions, history))]
pub async fn evaluate_and_unlock<S: AchievementStore + ?Sized>(
    store: &S,
    user_id: Uuid,
    definitions: &[AchievementDefinition],
    history: &UserHistory,
) -> anyhow::Result<Vec<AchievementStatus>> {
    let mut unlocked: HashMap<AchievementKind, AchievementUnlock> = store
        .unlocked(user_id)
        .await?
        .into_iter()
        .map(|unlock| (unlock.kind, unlock))
        .collect();

    for definition in definitions {
        if unlocked.contains_key(&definition.kind) {
            continue;
        }
        if evaluate(definition.kind, history) {
            let record = store.unlock(user_id, definition.kind).await?;
            debug!(user_id = %user_id, code = definition.kind.code(), "achievement unlocked");
            unlocked.insert(definition.kind, record);
        }
    }

    Ok(definitions
        .iter()
        .map(|definition| AchievementStatus {
            code: definition.kind.code().to_string(),
            name: definition.name.clone(),
            description: definition.description.clone(),
            icon_url: definition.icon_url.clone(),
            unlocked_at: unlocked.get(&definition.kind).map(|u| u.unlocked_at),
        })
        .collect())
}


#[cfg(test)]
mod orchestration_tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// HashMap-backed stand-in for the unlock table with its uniqueness rule.
    #[derive(Default)]
    struct MemoryStore {
        unlocks: Mutex<HashMap<(Uuid, AchievementKind), AchievementUnlock>>,
    }

    #[async_trait]
    impl AchievementStore for MemoryStore {
        async fn unlocked(&self, user_id: Uuid) -> anyhow::Result<Vec<AchievementUnlock>> {
            let unlocks = self.unlocks.lock().expect("lock");
            Ok(unlocks
                .values()
                .filter(|u| u.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn unlock(
            &self,
            user_id: Uuid,
            kind: AchievementKind,
        ) -> anyhow::Result<AchievementUnlock> {
            let mut unlocks = self.unlocks.lock().expect("lock");
            let record = unlocks
                .entry((user_id, kind))
                .or_insert_with(|| AchievementUnlock {
                    user_id,
                    kind,
                    unlocked_at: OffsetDateTime::now_utc(),
                });
            Ok(record.clone())
        }
    }

    fn history_with_one_entry() -> UserHistory {
        UserHistory {
            saved_log_count: 1,
            log_dates: vec![time::macros::date!(2026-08-01)],
            ..UserHistory::default()
        }
    }

    #[tokio::test]
    async fn unlocks_follow_definition_order() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        let definitions = default_definitions();

        let statuses =
            evaluate_and_unlock(&store, user_id, &definitions, &history_with_one_entry())
                .await
                .expect("orchestration should succeed");

        let codes: Vec<&str> = statuses.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["start", "discipline", "halfway", "winner"]);
        assert!(statuses[0].unlocked_at.is_some(), "started must unlock");
        assert!(statuses[1].unlocked_at.is_none());
        assert!(statuses[2].unlocked_at.is_none());
        assert!(statuses[3].unlocked_at.is_none());
    }

    #[tokio::test]
    async fn repeated_evaluation_is_idempotent() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        let definitions = default_definitions();
        let history = history_with_one_entry();

        let first = evaluate_and_unlock(&store, user_id, &definitions, &history)
            .await
            .expect("first run");
        let second = evaluate_and_unlock(&store, user_id, &definitions, &history)
            .await
            .expect("second run");

        assert_eq!(first, second, "timestamps must not drift between runs");
        let unlocks = store.unlocks.lock().expect("lock");
        assert_eq!(unlocks.len(), 1, "no duplicate unlock records");
    }

    #[tokio::test]
    async fn users_do_not_share_unlocks() {
        let store = MemoryStore::default();
        let definitions = default_definitions();

        evaluate_and_unlock(&store, Uuid::new_v4(), &definitions, &history_with_one_entry())
            .await
            .expect("first user");
        let other = evaluate_and_unlock(
            &store,
            Uuid::new_v4(),
            &definitions,
            &UserHistory::default(),
        )
        .await
        .expect("second user");

        assert!(other.iter().all(|s| s.unlocked_at.is_none()));
    }
}
