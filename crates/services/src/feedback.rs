use std::sync::Arc;

use phrase_core::model::{AppSettings, QuizState};

use crate::sessions::AnswerOutcome;
use crate::speech::SpeechController;

/// Fire-and-forget feedback channel (haptics or sound effects).
pub trait FeedbackSink: Send + Sync {
    fn notify_correct(&self);
    fn notify_incorrect(&self);
    fn notify_tap(&self);
}

/// Routes session results to haptics, sound effects and speech according to
/// the user's settings.
#[derive(Clone)]
pub struct AnswerFeedback {
    haptics: Arc<dyn FeedbackSink>,
    sounds: Arc<dyn FeedbackSink>,
    speech: Arc<SpeechController>,
}

impl AnswerFeedback {
    #[must_use]
    pub fn new(
        haptics: Arc<dyn FeedbackSink>,
        sounds: Arc<dyn FeedbackSink>,
        speech: Arc<SpeechController>,
    ) -> Self {
        Self {
            haptics,
            sounds,
            speech,
        }
    }

    #[must_use]
    pub fn speech(&self) -> &SpeechController {
        &self.speech
    }

    pub fn on_answer(&self, outcome: &AnswerOutcome, settings: &AppSettings) {
        if settings.haptic_enabled() {
            if outcome.is_correct {
                self.haptics.notify_correct();
            } else {
                self.haptics.notify_incorrect();
            }
        }
        if settings.sound_effects_enabled() {
            if outcome.is_correct {
                self.sounds.notify_correct();
            } else {
                self.sounds.notify_incorrect();
            }
        }
        if settings.auto_play_audio() {
            self.speech.speak(outcome.phrase.source_text());
        }
    }

    /// Plays the new question's phrase when auto-play is on.
    pub fn on_question(&self, quiz: &QuizState, settings: &AppSettings) {
        if settings.auto_play_audio() {
            self.speech.speak(quiz.phrase().source_text());
        }
    }

    pub fn on_tap(&self, settings: &AppSettings) {
        if settings.haptic_enabled() {
            self.haptics.notify_tap();
        }
    }
}
