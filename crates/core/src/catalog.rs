use std::collections::HashSet;

use crate::model::{Category, Phrase, PhraseId, ProgressView, Stage};

/// Static phrase content, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseCatalog {
    phrases: Vec<Phrase>,
}

impl PhraseCatalog {
    /// Builds a catalog, keeping the first phrase for any repeated id.
    #[must_use]
    pub fn new(phrases: Vec<Phrase>) -> Self {
        let mut seen = HashSet::with_capacity(phrases.len());
        let phrases = phrases
            .into_iter()
            .filter(|phrase| {
                let fresh = seen.insert(phrase.id());
                if !fresh {
                    log::warn!("dropping phrase with duplicate id {}", phrase.id());
                }
                fresh
            })
            .collect();
        Self { phrases }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn all(&self) -> &[Phrase] {
        &self.phrases
    }

    #[must_use]
    pub fn get(&self, id: PhraseId) -> Option<&Phrase> {
        self.phrases.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn for_category(&self, category: Category) -> Vec<Phrase> {
        self.phrases
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// Phrases flagged for the review drill.
    #[must_use]
    pub fn core_phrases(&self) -> Vec<Phrase> {
        self.phrases.iter().filter(|p| p.is_core()).cloned().collect()
    }

    #[must_use]
    pub fn stage(&self, category: Category, progress: &impl ProgressView) -> Stage {
        Stage::derive(category, self.for_category(category), progress)
    }

    /// Every stage in display order, including stages with no phrases.
    #[must_use]
    pub fn stages(&self, progress: &impl ProgressView) -> Vec<Stage> {
        let mut categories = Category::ALL;
        categories.sort_by_key(|c| c.order());
        categories
            .into_iter()
            .map(|category| self.stage(category, progress))
            .collect()
    }
}
