mod difficulty;
mod question;
mod result;
mod session;
mod snapshot;

pub use difficulty::{Difficulty, DifficultyParseError};
pub use question::{Question, QuestionError};
pub use result::{ResultCategory, SessionResult};
pub use session::{QuizSession, SessionError, SessionOutcome, SessionState};
pub use snapshot::{RevealedAnswer, SessionSnapshot};
