use std::fmt;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use phrase_core::model::{Phrase, QuizMode, QuizState, ReviewSummary, StageId};
use phrase_core::{Clock, PhraseCatalog, ShownSet, generate_question};

use super::outcome::AnswerOutcome;
use crate::error::SessionError;

/// Questions in one review drill.
pub const REVIEW_LENGTH: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPhase {
    Active,
    Answered,
    Finished(ReviewSummary),
}

/// Fixed-length drill over the core phrases.
///
/// Scores are kept locally; stage streaks and cleared stages are never read or
/// written.
pub struct ReviewSession<R = StdRng> {
    pool: Vec<Phrase>,
    rng: R,
    clock: Clock,
    shown: ShownSet,
    mode: QuizMode,
    quiz: QuizState,
    phase: ReviewPhase,
    length: u32,
    question_index: u32,
    correct_count: u32,
    started_at: DateTime<Utc>,
}

impl ReviewSession {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if the catalog has no core phrases.
    pub fn start(
        catalog: &PhraseCatalog,
        mode: QuizMode,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        Self::start_with_rng(catalog, mode, clock, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> ReviewSession<R> {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if the catalog has no core phrases.
    pub fn start_with_rng(
        catalog: &PhraseCatalog,
        mode: QuizMode,
        clock: Clock,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let pool = catalog.core_phrases();
        if pool.is_empty() {
            return Err(SessionError::EmptyCatalog {
                scope: StageId::review(),
            });
        }
        let mut shown = ShownSet::new();
        let quiz = generate_question(&pool, &mut shown, mode, 0, &mut rng)?;

        Ok(Self {
            pool,
            rng,
            clock,
            shown,
            mode,
            quiz,
            phase: ReviewPhase::Active,
            length: REVIEW_LENGTH,
            question_index: 0,
            correct_count: 0,
            started_at: clock.now(),
        })
    }

    /// Overrides the number of questions (at least one).
    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length.max(1);
        self
    }

    #[must_use]
    pub fn stage_id(&self) -> StageId {
        StageId::review()
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    #[must_use]
    pub fn phase(&self) -> &ReviewPhase {
        &self.phase
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn summary(&self) -> Option<&ReviewSummary> {
        match &self.phase {
            ReviewPhase::Finished(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn speech_text(&self) -> &str {
        self.quiz.phrase().source_text()
    }

    /// Answer the current question. `None` if it was already answered or the
    /// drill is finished.
    pub fn select_answer(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.phase != ReviewPhase::Active || !self.quiz.select_answer(answer) {
            return None;
        }
        let is_correct = self.quiz.is_correct() == Some(true);
        if is_correct {
            self.correct_count += 1;
        }
        self.phase = ReviewPhase::Answered;

        Some(AnswerOutcome {
            phrase: self.quiz.phrase().clone(),
            selected: answer.to_owned(),
            correct_answer: self.quiz.correct_answer().to_owned(),
            is_correct,
            streak: 0,
            stage_cleared: false,
        })
    }

    /// Advance past an answered question; after the last one the drill
    /// finishes with a summary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unanswered` if the current question is open and
    /// `SessionError::Completed` if the drill already finished.
    pub fn next_question(&mut self) -> Result<&ReviewPhase, SessionError> {
        match self.phase {
            ReviewPhase::Finished(_) => return Err(SessionError::Completed),
            ReviewPhase::Active => return Err(SessionError::Unanswered),
            ReviewPhase::Answered => {}
        }

        let next_index = self.question_index + 1;
        if next_index >= self.length {
            // a wall clock that stepped backwards must not block finishing
            let completed_at = self.clock.now().max(self.started_at);
            let summary = ReviewSummary::new(
                self.correct_count,
                self.length,
                self.started_at,
                completed_at,
            )?;
            log::info!(
                "review finished: {}/{} ({})",
                summary.correct(),
                summary.total(),
                summary.band().label()
            );
            self.phase = ReviewPhase::Finished(summary);
        } else {
            self.regenerate()?;
        }
        self.question_index = next_index;
        Ok(&self.phase)
    }

    /// Change direction. An open question is replaced in the new mode; an
    /// answered one keeps its result and the new mode starts with the next
    /// question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the drill already finished.
    pub fn switch_mode(&mut self, mode: QuizMode) -> Result<(), SessionError> {
        if matches!(self.phase, ReviewPhase::Finished(_)) {
            return Err(SessionError::Completed);
        }
        self.mode = mode;
        if self.phase == ReviewPhase::Active {
            self.regenerate()?;
        }
        Ok(())
    }

    /// Start the drill over from the first question.
    ///
    /// # Errors
    ///
    /// Propagates question generation failures.
    pub fn retry(&mut self) -> Result<&QuizState, SessionError> {
        self.question_index = 0;
        self.correct_count = 0;
        self.shown.clear();
        self.started_at = self.clock.now();
        self.regenerate()?;
        Ok(&self.quiz)
    }

    fn regenerate(&mut self) -> Result<(), SessionError> {
        self.quiz = generate_question(&self.pool, &mut self.shown, self.mode, 0, &mut self.rng)?;
        self.phase = ReviewPhase::Active;
        Ok(())
    }
}

impl<R> fmt::Debug for ReviewSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewSession")
            .field("pool_len", &self.pool.len())
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("question_index", &self.question_index)
            .field("correct_count", &self.correct_count)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use phrase_core::model::{Category, PhraseId, ScoreBand};
    use phrase_core::time::fixed_now;

    fn catalog(core: u32, extra: u32) -> PhraseCatalog {
        let phrase = |id: u32| {
            Phrase::new(
                PhraseId::new(id),
                Category::Basic,
                format!("thai-{id}"),
                format!("reading-{id}"),
                format!("meaning-{id}"),
            )
        };
        let mut phrases: Vec<Phrase> = (1..=core).map(|id| phrase(id).core()).collect();
        phrases.extend((core + 1..=core + extra).map(phrase));
        PhraseCatalog::new(phrases)
    }

    fn session(seed: u64) -> ReviewSession<StdRng> {
        ReviewSession::start_with_rng(
            &catalog(6, 4),
            QuizMode::Listen,
            Clock::fixed(fixed_now()),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn answer(session: &mut ReviewSession<StdRng>, correct: bool) {
        let quiz = session.quiz();
        let text = if correct {
            quiz.correct_answer().to_owned()
        } else {
            quiz.options()
                .iter()
                .map(|o| o.text().to_owned())
                .find(|t| t != quiz.correct_answer())
                .unwrap()
        };
        session.select_answer(&text).unwrap();
    }

    fn run(session: &mut ReviewSession<StdRng>, correct: u32) -> ReviewSummary {
        for i in 0..REVIEW_LENGTH {
            answer(session, i < correct);
            session.next_question().unwrap();
        }
        session.summary().cloned().unwrap()
    }

    #[test]
    fn no_core_phrases_is_an_empty_catalog() {
        let err = ReviewSession::start(&catalog(0, 5), QuizMode::Listen, Clock::default())
            .unwrap_err();
        assert!(matches!(err, SessionError::EmptyCatalog { scope } if scope.is_review()));
    }

    #[test]
    fn only_core_phrases_are_asked() {
        let mut session = session(1);
        for _ in 0..REVIEW_LENGTH {
            assert!(session.quiz().phrase().is_core());
            assert_eq!(session.quiz().streak_at_display(), 0);
            answer(&mut session, true);
            session.next_question().unwrap();
        }
    }

    #[test]
    fn scores_are_banded() {
        assert_eq!(run(&mut session(2), 8).band(), ScoreBand::Excellent);
        assert_eq!(run(&mut session(3), 5).band(), ScoreBand::Good);
        assert_eq!(run(&mut session(4), 4).band(), ScoreBand::NeedsPractice);
    }

    #[test]
    fn finished_drill_rejects_further_steps() {
        let mut session = session(5);
        let summary = run(&mut session, 10);
        assert_eq!(summary.correct(), 10);
        assert_eq!(summary.total(), REVIEW_LENGTH);
        assert!(session.select_answer("anything").is_none());
        assert!(matches!(session.next_question(), Err(SessionError::Completed)));
    }

    #[test]
    fn summary_uses_the_clock() {
        let mut clock = Clock::fixed(fixed_now());
        let mut session = ReviewSession::start_with_rng(
            &catalog(4, 0),
            QuizMode::Speak,
            clock,
            StdRng::seed_from_u64(6),
        )
        .unwrap()
        .with_length(1);
        clock.advance(Duration::minutes(2));
        session.clock = clock;

        answer(&mut session, true);
        session.next_question().unwrap();
        let summary = session.summary().unwrap();
        assert_eq!(summary.started_at(), fixed_now());
        assert_eq!(summary.completed_at(), fixed_now() + Duration::minutes(2));
    }

    #[test]
    fn clock_stepping_back_still_finishes_once() {
        let mut session = session(9).with_length(2);
        answer(&mut session, true);
        session.next_question().unwrap();
        answer(&mut session, true);

        session.clock = Clock::fixed(fixed_now() - Duration::seconds(5));
        let phase = session.next_question().unwrap();
        assert!(matches!(phase, ReviewPhase::Finished(_)));
        assert_eq!(session.question_index(), 2);

        let summary = session.summary().unwrap();
        assert_eq!((summary.correct(), summary.total()), (2, 2));
        assert_eq!(summary.completed_at(), summary.started_at());
        assert!(matches!(session.next_question(), Err(SessionError::Completed)));
        assert_eq!(session.question_index(), 2);
    }

    #[test]
    fn switching_mode_after_answering_keeps_the_score() {
        let mut session = session(7);
        answer(&mut session, true);
        session.switch_mode(QuizMode::Speak).unwrap();
        assert_eq!(session.phase(), &ReviewPhase::Answered);
        assert_eq!(session.correct_count(), 1);

        session.next_question().unwrap();
        assert_eq!(session.quiz().mode(), QuizMode::Speak);
        assert_eq!(session.question_index(), 1);
    }

    #[test]
    fn retry_starts_over() {
        let mut session = session(8);
        run(&mut session, 6);
        session.retry().unwrap();
        assert_eq!(session.phase(), &ReviewPhase::Active);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.correct_count(), 0);
    }
}
