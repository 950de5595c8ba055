use phrase_core::PhraseCatalog;
use phrase_core::model::{Category, ProgressView, Stage};

/// Stage list and overall progress for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeOverview {
    stages: Vec<Stage>,
    has_core_phrases: bool,
}

impl HomeOverview {
    /// Derive a fresh snapshot; rebuild it after progress changes.
    #[must_use]
    pub fn build(catalog: &PhraseCatalog, progress: &impl ProgressView) -> Self {
        Self {
            stages: catalog.stages(progress),
            has_core_phrases: catalog.all().iter().any(|p| p.is_core()),
        }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn stage(&self, category: Category) -> Option<&Stage> {
        self.stages.iter().find(|s| s.category() == category)
    }

    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.stages.iter().filter(|s| s.is_cleared()).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.stages.len()
    }

    /// Fraction of stages cleared, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_ratio(&self) -> f64 {
        if self.stages.is_empty() {
            return 0.0;
        }
        self.cleared_count() as f64 / self.total_count() as f64
    }

    /// Whether the review drill can be offered.
    #[must_use]
    pub fn has_core_phrases(&self) -> bool {
        self.has_core_phrases
    }
}
