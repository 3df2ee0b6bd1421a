#![forbid(unsafe_code)]

pub mod error;
mod html;
mod local;
mod open_trivia;
mod provider;
mod quiz_service;

pub use error::{ProviderError, QuizServiceError};
pub use local::LocalQuestionProvider;
pub use open_trivia::{OpenTriviaConfig, OpenTriviaProvider};
pub use provider::QuestionProvider;
pub use quiz_service::{
    DEFAULT_QUESTION_COUNT, DEFAULT_QUESTION_SECS, QuizReport, QuizService, QuizSettings,
};
