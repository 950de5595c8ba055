use serde::{Deserialize, Serialize};

use crate::model::Phrase;

//
// ─── QUIZ MODE ─────────────────────────────────────────────────────────────────
//

/// Direction of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    /// Thai is shown; the learner picks the meaning.
    #[default]
    Listen,
    /// The meaning is shown; the learner picks the Thai they would say.
    Speak,
}

impl QuizMode {
    /// The field of `phrase` that answer options are built from.
    #[must_use]
    pub fn answer_for(self, phrase: &Phrase) -> &str {
        match self {
            QuizMode::Listen => phrase.meaning(),
            QuizMode::Speak => phrase.source_text(),
        }
    }

    /// Pronunciation guides only accompany options the learner has to say.
    #[must_use]
    pub fn shows_option_guides(self) -> bool {
        matches!(self, QuizMode::Speak)
    }

    #[must_use]
    pub fn prompt_label(self) -> &'static str {
        match self {
            QuizMode::Listen => "What does this Thai phrase mean?",
            QuizMode::Speak => "How do you say this in Thai?",
        }
    }
}

//
// ─── OPTION ITEM ───────────────────────────────────────────────────────────────
//

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionItem {
    text: String,
    pronunciation_guide: Option<String>,
}

impl OptionItem {
    #[must_use]
    pub fn for_phrase(phrase: &Phrase, mode: QuizMode) -> Self {
        Self {
            text: mode.answer_for(phrase).to_owned(),
            pronunciation_guide: mode
                .shows_option_guides()
                .then(|| phrase.pronunciation_guide().to_owned()),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn pronunciation_guide(&self) -> Option<&str> {
        self.pronunciation_guide.as_deref()
    }
}

//
// ─── QUIZ STATE ────────────────────────────────────────────────────────────────
//

/// One in-flight question. Replaced wholesale for every new question; the only
/// in-place transition is [`QuizState::select_answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    phrase: Phrase,
    mode: QuizMode,
    options: Vec<OptionItem>,
    correct_answer: String,
    selected_answer: Option<String>,
    answered: bool,
    is_correct: Option<bool>,
    streak_at_display: u32,
}

impl QuizState {
    /// Callers must include exactly one option whose text equals `correct_answer`.
    #[must_use]
    pub(crate) fn new(
        phrase: Phrase,
        mode: QuizMode,
        options: Vec<OptionItem>,
        correct_answer: String,
        streak_at_display: u32,
    ) -> Self {
        Self {
            phrase,
            mode,
            options,
            correct_answer,
            selected_answer: None,
            answered: false,
            is_correct: None,
            streak_at_display,
        }
    }

    /// Records the learner's choice.
    ///
    /// Returns `false` and leaves the state untouched if an answer was already
    /// recorded.
    pub fn select_answer(&mut self, answer: impl Into<String>) -> bool {
        if self.answered {
            return false;
        }
        let answer = answer.into();
        self.is_correct = Some(answer == self.correct_answer);
        self.selected_answer = Some(answer);
        self.answered = true;
        true
    }

    #[must_use]
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn streak_at_display(&self) -> u32 {
        self.streak_at_display
    }

    /// Text shown as the question itself.
    #[must_use]
    pub fn question_text(&self) -> &str {
        match self.mode {
            QuizMode::Listen => self.phrase.source_text(),
            QuizMode::Speak => self.phrase.meaning(),
        }
    }

    /// Reading shown under the question (listen mode only).
    #[must_use]
    pub fn question_guide(&self) -> Option<&str> {
        match self.mode {
            QuizMode::Listen => Some(self.phrase.pronunciation_guide()),
            QuizMode::Speak => None,
        }
    }
}
