mod outcome;
mod review;
mod stage;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use outcome::AnswerOutcome;
pub use review::{REVIEW_LENGTH, ReviewPhase, ReviewSession};
pub use stage::{StagePhase, StageSession};
