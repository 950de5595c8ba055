#![forbid(unsafe_code)]

pub mod app_services;
pub mod app_settings_service;
pub mod error;
pub mod feedback;
pub mod overview;
pub mod sessions;
pub mod speech;

pub use phrase_core::Clock;

pub use app_services::{AppConfig, AppServices};
pub use app_settings_service::AppSettingsService;
pub use error::{AppServicesError, AppSettingsServiceError, SessionError, SpeechError};
pub use feedback::{AnswerFeedback, FeedbackSink};
pub use overview::HomeOverview;
pub use sessions::{
    AnswerOutcome, REVIEW_LENGTH, ReviewPhase, ReviewSession, StagePhase, StageSession,
};
pub use speech::{SpeechController, SpeechEngine};
