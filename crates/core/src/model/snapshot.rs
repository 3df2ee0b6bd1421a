use serde::Serialize;

/// The revealed outcome of the active question, present once it has been
/// answered or timed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealedAnswer {
    /// The option the user picked; `None` when the countdown expired first.
    pub selected: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
}

/// Read-only view of session state, emitted after every operation for the
/// presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Zero-based index of the active question.
    pub question_index: usize,
    pub total: usize,
    pub question_text: String,
    pub options: Vec<String>,
    pub remaining_secs: u32,
    pub score: u32,
    /// Populated only while the answer is revealed.
    pub reveal: Option<RevealedAnswer>,
}

impl SessionSnapshot {
    /// Returns true once the active question's answer has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_some()
    }
}
