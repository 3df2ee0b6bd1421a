//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, SessionError};

/// Errors emitted by question providers.
///
/// Provider failures are recoverable: callers retry or fall back to the
/// local question set. A failed fetch never yields a partial question list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("question source produced no usable questions")]
    Empty,

    #[error("question service answered with api code {code}")]
    Api { code: u8 },

    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
