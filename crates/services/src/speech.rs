//! Text-to-speech playback with last-request-wins semantics.
//!
//! Platform engines do not report when an utterance ends, so `is_speaking`
//! is cleared by a timer. Every request bumps a generation counter; a timer
//! only clears the flag if its generation is still current.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::SpeechError;

/// How long an utterance is assumed to last.
pub const SPEECH_HOLD: Duration = Duration::from_secs(2);

/// Platform text-to-speech for Thai.
pub trait SpeechEngine: Send + Sync {
    /// False when no Thai voice is installed.
    fn is_available(&self) -> bool;
    fn speak(&self, text: &str);
    fn stop(&self);
}

#[derive(Default)]
struct SpeechState {
    is_speaking: bool,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

pub struct SpeechController {
    engine: Arc<dyn SpeechEngine>,
    runtime: Handle,
    hold: Duration,
    state: Arc<Mutex<SpeechState>>,
}

impl SpeechController {
    #[must_use]
    pub fn new(engine: Arc<dyn SpeechEngine>, runtime: Handle) -> Self {
        if !engine.is_available() {
            log::info!("no Thai voice installed; speech disabled");
        }
        Self {
            engine,
            runtime,
            hold: SPEECH_HOLD,
            state: Arc::new(Mutex::new(SpeechState::default())),
        }
    }

    #[must_use]
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.engine.is_available()
    }

    #[must_use]
    pub fn is_speaking(&self) -> bool {
        self.lock().is_speaking
    }

    /// Speak `text`, cutting off anything still playing.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::ResourceUnavailable` if no Thai voice is installed.
    pub fn try_speak(&self, text: &str) -> Result<(), SpeechError> {
        if !self.engine.is_available() {
            return Err(SpeechError::ResourceUnavailable);
        }

        let mut state = self.lock();
        self.engine.stop();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        state.is_speaking = true;
        self.engine.speak(text);
        log::debug!("speaking (generation {})", state.generation);

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let deadline = Instant::now() + self.hold;
        state.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation {
                state.is_speaking = false;
                state.timer = None;
            }
        }));
        Ok(())
    }

    /// Like [`try_speak`](Self::try_speak), but a missing voice is silently ignored.
    pub fn speak(&self, text: &str) {
        if let Err(err) = self.try_speak(text) {
            log::debug!("speech skipped: {err}");
        }
    }

    pub fn stop(&self) {
        let mut state = self.lock();
        self.engine.stop();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        state.is_speaking = false;
    }

    fn lock(&self) -> MutexGuard<'_, SpeechState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        if let Some(timer) = self.lock().timer.take() {
            timer.abort();
        }
    }
}
