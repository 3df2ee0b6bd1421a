use std::fmt;

use serde::Serialize;

//
// ─── SESSION RESULT ────────────────────────────────────────────────────────────
//

/// Terminal score summary of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub score: u32,
    pub total: u32,
}

impl SessionResult {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// Score as a whole percentage, rounded half up.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score * 200 + self.total) / (self.total * 2)
    }

    /// Qualitative band for this result. Computed once from the final score;
    /// same inputs always yield the same band.
    #[must_use]
    pub fn category(&self) -> ResultCategory {
        ResultCategory::from_percent(self.percent())
    }
}

//
// ─── RESULT CATEGORY ───────────────────────────────────────────────────────────
//

/// Qualitative judgement of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultCategory {
    /// 80% and above.
    Excellent,
    /// 60% to 79%.
    Good,
    /// 40% to 59%.
    Fair,
    /// Below 40%.
    NeedsPractice,
}

impl ResultCategory {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            ResultCategory::Excellent
        } else if percent >= 60 {
            ResultCategory::Good
        } else if percent >= 40 {
            ResultCategory::Fair
        } else {
            ResultCategory::NeedsPractice
        }
    }

    /// Short message for the result screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ResultCategory::Excellent => "Excellent!",
            ResultCategory::Good => "Good job!",
            ResultCategory::Fair => "Not bad!",
            ResultCategory::NeedsPractice => "Keep practicing!",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
