//! Shared error types for the services crate.

use thiserror::Error;

use phrase_core::QuizError;
use phrase_core::model::{ReviewSummaryError, StageId};
use storage::StorageError;

/// Errors emitted by session controllers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no phrases available for {scope}")]
    EmptyCatalog { scope: StageId },
    #[error("session already completed")]
    Completed,
    #[error("current question has not been answered")]
    Unanswered,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Summary(#[from] ReviewSummaryError),
}

/// Errors emitted by `SpeechController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("no Thai voice is installed")]
    ResourceUnavailable,
}

/// Errors emitted by `AppSettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
