mod ids;
mod phrase;
mod quiz;
mod review;
mod settings;
mod stage;

pub use ids::{PhraseId, StageId};
pub use phrase::{Category, Phrase};
pub use quiz::{OptionItem, QuizMode, QuizState};
pub use review::{ReviewSummary, ReviewSummaryError, ScoreBand};
pub use settings::{AppSettings, AppearanceMode};
pub use stage::{ProgressView, REQUIRED_STREAK, Stage};
