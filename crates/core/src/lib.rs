#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Difficulty, DifficultyParseError, Question, QuestionError, QuizSession, ResultCategory,
    RevealedAnswer, SessionError, SessionOutcome, SessionResult, SessionSnapshot, SessionState,
};
