use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),

    #[error("answer {0:?} is not one of the options")]
    AnswerNotAnOption(String),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Options keep the order they were given in (providers shuffle before
/// construction), and the answer is always one of them. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, fewer than two options
    /// are given, options repeat, or the answer is not among the options.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let answer = answer.into();

        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        if !options.iter().any(|option| *option == answer) {
            return Err(QuestionError::AnswerNotAnOption(answer));
        }

        Ok(Self {
            text,
            options,
            answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct option.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns true when `option` is one of this question's choices.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn valid_question_builds() {
        let question =
            Question::new("What is 5 + 3?", options(&["5", "8", "9", "7"]), "8").unwrap();

        assert_eq!(question.text(), "What is 5 + 3?");
        assert_eq!(question.options().len(), 4);
        assert_eq!(question.answer(), "8");
        assert!(question.has_option("9"));
        assert!(!question.has_option("42"));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Question::new("   ", options(&["a", "b"]), "a").unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn single_option_is_rejected() {
        let err = Question::new("Q", options(&["only"]), "only").unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions(1));
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let err = Question::new("Q", options(&["a", "b", "a"]), "b").unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption("a".into()));
    }

    #[test]
    fn answer_outside_options_is_rejected() {
        let err = Question::new("Q", options(&["a", "b"]), "c").unwrap_err();
        assert_eq!(err, QuestionError::AnswerNotAnOption("c".into()));
    }
}
