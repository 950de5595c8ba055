use serde::{Deserialize, Serialize};

use crate::model::ids::PhraseId;

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Travel situation a phrase belongs to. Each category is one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Airport,
    Transport,
    Hotel,
    Food,
    Basic,
}

impl Category {
    /// All categories in stage display order.
    pub const ALL: [Category; 5] = [
        Category::Airport,
        Category::Transport,
        Category::Hotel,
        Category::Food,
        Category::Basic,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Airport => "airport",
            Category::Transport => "transport",
            Category::Hotel => "hotel",
            Category::Food => "food",
            Category::Basic => "basic",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Airport => "Airport & In-flight",
            Category::Transport => "Getting Around",
            Category::Hotel => "Hotel",
            Category::Food => "Eating Out",
            Category::Basic => "Basics & Emergencies",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Category::Airport => "Immigration, currency exchange, restrooms",
            Category::Transport => "Taxis and telling the driver where to go",
            Category::Hotel => "Check-in, Wi-Fi, breakfast",
            Category::Food => "Ordering, spice level, no coriander",
            Category::Basic => "Greetings, requests, when things go wrong",
        }
    }

    #[must_use]
    pub fn order(self) -> u8 {
        match self {
            Category::Airport => 0,
            Category::Transport => 1,
            Category::Hotel => 2,
            Category::Food => 3,
            Category::Basic => 4,
        }
    }
}

//
// ─── PHRASE ────────────────────────────────────────────────────────────────────
//

/// A single Thai phrase with its reading and meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    id: PhraseId,
    category: Category,
    #[serde(alias = "sourceText", alias = "thai")]
    source_text: String,
    #[serde(alias = "pronunciationGuide", alias = "reading")]
    pronunciation_guide: String,
    meaning: String,
    #[serde(default)]
    note: Option<String>,
    #[serde(default, alias = "isCore")]
    is_core: bool,
}

impl Phrase {
    #[must_use]
    pub fn new(
        id: PhraseId,
        category: Category,
        source_text: impl Into<String>,
        pronunciation_guide: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            source_text: source_text.into(),
            pronunciation_guide: pronunciation_guide.into(),
            meaning: meaning.into(),
            note: None,
            is_core: false,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Flags the phrase for the bounded review drill.
    #[must_use]
    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> PhraseId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Thai script; this is also what gets spoken aloud.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn pronunciation_guide(&self) -> &str {
        &self.pronunciation_guide
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    #[must_use]
    pub fn is_core(&self) -> bool {
        self.is_core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_listed_in_display_order() {
        let orders: Vec<u8> = Category::ALL.iter().map(|c| c.order()).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn category_parse_matches_identifier() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("shopping"), None);
    }
}
