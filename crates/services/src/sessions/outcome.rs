use phrase_core::model::Phrase;

/// What happened when the learner picked an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub phrase: Phrase,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
    /// Streak reached by this answer; 0 after a miss and always 0 in review drills.
    pub streak: u32,
    pub stage_cleared: bool,
}
