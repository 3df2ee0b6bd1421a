use async_trait::async_trait;

use quiz_core::model::{Difficulty, Question};

use crate::error::ProviderError;

/// Source of quiz questions, remote or local.
///
/// Implementations return ready-to-play questions: text decoded, options
/// already shuffled, every record validated. The result is all-or-nothing;
/// a failed fetch never hands back a partial list.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Fetch up to `count` questions for the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the source fails or cannot produce at
    /// least one usable question (including `count == 0`).
    async fn fetch_questions(
        &self,
        count: u8,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, ProviderError>;
}
