use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use phrase_core::model::{ProgressView, StageId};

use crate::repository::{KeyValueStore, StorageError, read_json, write_json};

const CLEARED_STAGES_KEY: &str = "clearedStageIds";
const CURRENT_STREAKS_KEY: &str = "currentStreaks";
const ONBOARDING_COMPLETED_KEY: &str = "hasCompletedOnboarding";

/// Cleared stages, per-stage streaks and the onboarding flag.
///
/// The in-memory copy is authoritative for the running process. Every
/// mutation writes through to the backing store before returning; a failed
/// write is logged and otherwise ignored.
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
    cleared: BTreeSet<StageId>,
    streaks: BTreeMap<StageId, u32>,
    has_completed_onboarding: bool,
}

impl ProgressStore {
    /// Loads progress from `store`. Unreadable entries fall back to defaults.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let cleared: Vec<StageId> = load_or_default(store.as_ref(), CLEARED_STAGES_KEY);
        let streaks = load_or_default(store.as_ref(), CURRENT_STREAKS_KEY);
        let has_completed_onboarding = load_or_default(store.as_ref(), ONBOARDING_COMPLETED_KEY);
        Self {
            store,
            cleared: cleared.into_iter().collect(),
            streaks,
            has_completed_onboarding,
        }
    }

    #[must_use]
    pub fn streak(&self, stage: &StageId) -> u32 {
        self.streaks.get(stage).copied().unwrap_or(0)
    }

    /// Adds one to the stage's streak and returns the new value.
    pub fn increment_streak(&mut self, stage: &StageId) -> u32 {
        let streak = self.streaks.entry(stage.clone()).or_insert(0);
        *streak = streak.saturating_add(1);
        let streak = *streak;
        self.persist_progress();
        streak
    }

    pub fn reset_streak(&mut self, stage: &StageId) {
        self.streaks.insert(stage.clone(), 0);
        self.persist_progress();
    }

    /// Marks the stage cleared and zeroes its streak. Repeat calls only re-zero.
    pub fn mark_cleared(&mut self, stage: &StageId) {
        self.cleared.insert(stage.clone());
        self.streaks.insert(stage.clone(), 0);
        self.persist_progress();
    }

    #[must_use]
    pub fn is_stage_cleared(&self, stage: &StageId) -> bool {
        self.cleared.contains(stage)
    }

    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.cleared.len()
    }

    #[must_use]
    pub fn has_completed_onboarding(&self) -> bool {
        self.has_completed_onboarding
    }

    pub fn complete_onboarding(&mut self) {
        self.has_completed_onboarding = true;
        best_effort(
            ONBOARDING_COMPLETED_KEY,
            write_json(self.store.as_ref(), ONBOARDING_COMPLETED_KEY, &true),
        );
    }

    /// Forgets all progress, including onboarding. Irreversible.
    pub fn reset_all(&mut self) {
        self.cleared.clear();
        self.streaks.clear();
        self.has_completed_onboarding = false;
        for key in [
            CLEARED_STAGES_KEY,
            CURRENT_STREAKS_KEY,
            ONBOARDING_COMPLETED_KEY,
        ] {
            best_effort(key, self.store.remove(key));
        }
        log::info!("all progress reset");
    }

    fn persist_progress(&self) {
        let cleared: Vec<&StageId> = self.cleared.iter().collect();
        best_effort(
            CLEARED_STAGES_KEY,
            write_json(self.store.as_ref(), CLEARED_STAGES_KEY, &cleared),
        );
        best_effort(
            CURRENT_STREAKS_KEY,
            write_json(self.store.as_ref(), CURRENT_STREAKS_KEY, &self.streaks),
        );
    }
}

impl ProgressView for ProgressStore {
    fn streak(&self, stage: &StageId) -> u32 {
        ProgressStore::streak(self, stage)
    }

    fn is_stage_cleared(&self, stage: &StageId) -> bool {
        ProgressStore::is_stage_cleared(self, stage)
    }
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> T {
    match read_json(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            log::warn!("ignoring unreadable progress entry {key}: {err}");
            T::default()
        }
    }
}

fn best_effort(key: &str, result: Result<(), StorageError>) {
    if let Err(err) = result {
        log::warn!("failed to persist {key}: {err}");
    }
}
