use crate::model::{Category, Phrase, StageId};

/// Consecutive correct answers needed to clear a stage.
pub const REQUIRED_STREAK: u32 = 5;

/// Read access to persisted stage progress.
pub trait ProgressView {
    fn streak(&self, stage: &StageId) -> u32;
    fn is_stage_cleared(&self, stage: &StageId) -> bool;
}

/// A category's practice unit, derived from the catalog and stored progress.
///
/// `is_cleared` and `current_streak` are snapshots; derive a new `Stage` after
/// progress changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    category: Category,
    phrases: Vec<Phrase>,
    is_cleared: bool,
    current_streak: u32,
}

impl Stage {
    #[must_use]
    pub fn new(
        category: Category,
        phrases: Vec<Phrase>,
        is_cleared: bool,
        current_streak: u32,
    ) -> Self {
        Self {
            category,
            phrases,
            is_cleared,
            current_streak,
        }
    }

    /// Builds the stage view for `category` from its phrases and `progress`.
    #[must_use]
    pub fn derive(category: Category, phrases: Vec<Phrase>, progress: &impl ProgressView) -> Self {
        let id = StageId::from(category);
        Self::new(
            category,
            phrases,
            progress.is_stage_cleared(&id),
            progress.streak(&id),
        )
    }

    #[must_use]
    pub fn id(&self) -> StageId {
        StageId::from(self.category)
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.is_cleared
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn remaining_to_complete(&self) -> u32 {
        REQUIRED_STREAK.saturating_sub(self.current_streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedProgress(HashMap<StageId, (u32, bool)>);

    impl ProgressView for FixedProgress {
        fn streak(&self, stage: &StageId) -> u32 {
            self.0.get(stage).map_or(0, |(s, _)| *s)
        }

        fn is_stage_cleared(&self, stage: &StageId) -> bool {
            self.0.get(stage).is_some_and(|(_, c)| *c)
        }
    }

    #[test]
    fn derive_reads_progress_for_its_category() {
        let progress = FixedProgress(HashMap::from([
            (StageId::from(Category::Hotel), (3, false)),
            (StageId::from(Category::Food), (0, true)),
        ]));

        let hotel = Stage::derive(Category::Hotel, Vec::new(), &progress);
        assert_eq!(hotel.current_streak(), 3);
        assert_eq!(hotel.remaining_to_complete(), 2);
        assert!(!hotel.is_cleared());

        let food = Stage::derive(Category::Food, Vec::new(), &progress);
        assert!(food.is_cleared());
        assert_eq!(food.remaining_to_complete(), REQUIRED_STREAK);
    }

    #[test]
    fn remaining_never_underflows() {
        let stage = Stage::new(Category::Basic, Vec::new(), false, 9);
        assert_eq!(stage.remaining_to_complete(), 0);
    }
}
