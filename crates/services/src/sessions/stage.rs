use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use phrase_core::generate_question;
use phrase_core::model::{Phrase, QuizMode, QuizState, REQUIRED_STREAK, Stage, StageId};
use phrase_core::ShownSet;
use storage::ProgressStore;

use super::outcome::AnswerOutcome;
use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    /// A question is waiting for an answer.
    Active,
    /// The current question was answered; waiting for `next_question`.
    Answered,
    /// The required streak was reached. Terminal.
    Cleared,
}

//
// ─── STAGE SESSION ─────────────────────────────────────────────────────────────
//

/// Practice loop for one stage.
///
/// Every answer updates the stage's persisted streak; reaching
/// [`REQUIRED_STREAK`] consecutive correct answers clears the stage.
pub struct StageSession<'p, R = StdRng> {
    stage_id: StageId,
    phrases: Vec<Phrase>,
    progress: &'p mut ProgressStore,
    rng: R,
    shown: ShownSet,
    quiz: QuizState,
    phase: StagePhase,
}

impl<'p> StageSession<'p> {
    /// Start practising `stage` with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if the stage has no phrases.
    pub fn start(
        stage: &Stage,
        mode: QuizMode,
        progress: &'p mut ProgressStore,
    ) -> Result<Self, SessionError> {
        Self::start_with_rng(stage, mode, progress, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<'p, R: Rng> StageSession<'p, R> {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCatalog` if the stage has no phrases.
    pub fn start_with_rng(
        stage: &Stage,
        mode: QuizMode,
        progress: &'p mut ProgressStore,
        mut rng: R,
    ) -> Result<Self, SessionError> {
        let stage_id = stage.id();
        if stage.phrases().is_empty() {
            return Err(SessionError::EmptyCatalog { scope: stage_id });
        }
        let phrases = stage.phrases().to_vec();
        let mut shown = ShownSet::new();
        let streak = progress.streak(&stage_id);
        let quiz = generate_question(&phrases, &mut shown, mode, streak, &mut rng)?;

        Ok(Self {
            stage_id,
            phrases,
            progress,
            rng,
            shown,
            quiz,
            phase: StagePhase::Active,
        })
    }

    #[must_use]
    pub fn stage_id(&self) -> &StageId {
        &self.stage_id
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    #[must_use]
    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.quiz.mode()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.phase == StagePhase::Cleared
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.progress.streak(&self.stage_id)
    }

    #[must_use]
    pub fn remaining_to_complete(&self) -> u32 {
        REQUIRED_STREAK.saturating_sub(self.current_streak())
    }

    /// Thai text of the current phrase, for replaying audio.
    #[must_use]
    pub fn speech_text(&self) -> &str {
        self.quiz.phrase().source_text()
    }

    /// Answer the current question.
    ///
    /// Returns `None` without touching progress if the question was already
    /// answered or the stage is cleared.
    pub fn select_answer(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.phase != StagePhase::Active || !self.quiz.select_answer(answer) {
            return None;
        }
        let is_correct = self.quiz.is_correct() == Some(true);

        let mut stage_cleared = false;
        let streak = if is_correct {
            let streak = self.progress.increment_streak(&self.stage_id);
            if streak >= REQUIRED_STREAK {
                self.progress.mark_cleared(&self.stage_id);
                stage_cleared = true;
                log::info!("stage {} cleared", self.stage_id);
            }
            streak
        } else {
            self.progress.reset_streak(&self.stage_id);
            0
        };

        self.phase = if stage_cleared {
            StagePhase::Cleared
        } else {
            StagePhase::Answered
        };

        Some(AnswerOutcome {
            phrase: self.quiz.phrase().clone(),
            selected: answer.to_owned(),
            correct_answer: self.quiz.correct_answer().to_owned(),
            is_correct,
            streak,
            stage_cleared,
        })
    }

    /// Move on after an answer, showing the latest streak.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unanswered` if the current question is still open
    /// and `SessionError::Completed` once the stage is cleared.
    pub fn next_question(&mut self) -> Result<&QuizState, SessionError> {
        match self.phase {
            StagePhase::Cleared => Err(SessionError::Completed),
            StagePhase::Active => Err(SessionError::Unanswered),
            StagePhase::Answered => {
                self.regenerate(self.quiz.mode())?;
                Ok(&self.quiz)
            }
        }
    }

    /// Replace the current question with a fresh one in `mode`.
    ///
    /// Not an attempt: the streak is untouched, and phrases already shown in
    /// this pass stay excluded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the stage is cleared.
    pub fn switch_mode(&mut self, mode: QuizMode) -> Result<&QuizState, SessionError> {
        if self.phase == StagePhase::Cleared {
            return Err(SessionError::Completed);
        }
        self.regenerate(mode)?;
        Ok(&self.quiz)
    }

    fn regenerate(&mut self, mode: QuizMode) -> Result<(), SessionError> {
        let streak = self.progress.streak(&self.stage_id);
        self.quiz = generate_question(&self.phrases, &mut self.shown, mode, streak, &mut self.rng)?;
        self.phase = StagePhase::Active;
        Ok(())
    }
}

impl<R> fmt::Debug for StageSession<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageSession")
            .field("stage_id", &self.stage_id)
            .field("phrases_len", &self.phrases.len())
            .field("shown_len", &self.shown.len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
