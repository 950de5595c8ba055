use thiserror::Error;

/// Errors raised by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot build a question from an empty phrase pool")]
    EmptyPool,
}
