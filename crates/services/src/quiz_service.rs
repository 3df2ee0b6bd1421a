use std::sync::Arc;

use serde::Serialize;

use quiz_core::model::{Difficulty, QuizSession, ResultCategory, SessionResult};

use crate::error::QuizServiceError;
use crate::provider::QuestionProvider;

pub const DEFAULT_QUESTION_COUNT: u8 = 10;
pub const DEFAULT_QUESTION_SECS: u32 = 15;

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Knobs for building a session: how many questions, how long per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub question_count: u8,
    pub question_secs: u32,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            question_secs: DEFAULT_QUESTION_SECS,
        }
    }
}

//
// ─── QUIZ REPORT ───────────────────────────────────────────────────────────────
//

/// Payload handed to the result consumer once a session completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub score: u32,
    pub total: u32,
    pub difficulty: Difficulty,
}

impl QuizReport {
    #[must_use]
    pub fn new(result: SessionResult, difficulty: Difficulty) -> Self {
        Self {
            score: result.score,
            total: result.total,
            difficulty,
        }
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        SessionResult::new(self.score, self.total).percent()
    }

    #[must_use]
    pub fn category(&self) -> ResultCategory {
        SessionResult::new(self.score, self.total).category()
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Builds playable sessions from a question provider.
///
/// The service owns no game state; it fetches questions for a difficulty and
/// hands the presentation layer a fresh, not-yet-started [`QuizSession`].
#[derive(Clone)]
pub struct QuizService {
    provider: Arc<dyn QuestionProvider>,
    settings: QuizSettings,
}

impl QuizService {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            provider,
            settings: QuizSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Fetch questions and build a session for one play-through.
    ///
    /// Construction is all-or-nothing: a provider failure leaves no partial
    /// session behind.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError` when the provider fails or the fetched
    /// list cannot form a valid session.
    pub async fn new_session(&self, difficulty: Difficulty) -> Result<QuizSession, QuizServiceError> {
        let questions = self
            .provider
            .fetch_questions(self.settings.question_count, difficulty)
            .await?;
        let session = QuizSession::new(questions, self.settings.question_secs)?;
        Ok(session)
    }
}
