use thiserror::Error;

use crate::model::question::Question;
use crate::model::result::SessionResult;
use crate::model::snapshot::{RevealedAnswer, SessionSnapshot};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a session needs at least one question")]
    Empty,

    #[error("per-question duration must be at least one second")]
    ZeroDuration,

    #[error("option {option:?} is not one of the current question's choices")]
    UnknownOption { option: String },

    #[error("{operation} is not valid while the session is {state:?}")]
    InvalidTransition {
        operation: &'static str,
        state: SessionState,
    },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    /// Countdown running, waiting for a submission or a timeout.
    AwaitingAnswer,
    /// The active question's answer is shown; only `advance` moves on.
    AnswerRevealed,
    /// Terminal. No further operation is valid.
    Completed,
}

/// What `advance` produced: the next question, or the terminal summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Next(SessionSnapshot),
    Finished(SessionResult),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of a fixed question list under a per-question countdown.
///
/// The session is a synchronous state machine owned by the presentation
/// layer. It keeps no clock of its own: the caller drives the countdown by
/// calling [`QuizSession::tick`] once per elapsed second. Every operation
/// returns a [`SessionSnapshot`] (or the terminal [`SessionResult`]) for
/// rendering; the session itself is the only holder of game state.
///
/// ```text
/// NotStarted --start--> AwaitingAnswer
/// AwaitingAnswer --submit_answer--> AnswerRevealed
/// AwaitingAnswer --tick reaches 0--> AnswerRevealed (no selection)
/// AnswerRevealed --advance--> AwaitingAnswer | Completed
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    duration_secs: u32,
    current: usize,
    score: u32,
    selected: Option<String>,
    remaining_secs: u32,
    state: SessionState,
}

impl QuizSession {
    /// Creates a session over `questions` with a fixed per-question countdown.
    ///
    /// Questions are already validated by [`Question::new`]; configuration
    /// checks here are all-or-nothing, so a failed construction leaves
    /// nothing behind.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty question list and
    /// `SessionError::ZeroDuration` for a zero countdown.
    pub fn new(questions: Vec<Question>, duration_secs: u32) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        if duration_secs == 0 {
            return Err(SessionError::ZeroDuration);
        }

        Ok(Self {
            questions,
            duration_secs,
            current: 0,
            score: 0,
            selected: None,
            remaining_secs: duration_secs,
            state: SessionState::NotStarted,
        })
    }

    /// Begins the session on the first question.
    ///
    /// Strict by design: a second `start` is an error rather than a no-op,
    /// so a double-wired presentation layer fails loudly.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is
    /// `NotStarted`.
    pub fn start(&mut self) -> Result<SessionSnapshot, SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(self.invalid("start"));
        }
        self.state = SessionState::AwaitingAnswer;
        self.remaining_secs = self.duration_secs;
        Ok(self.snapshot())
    }

    /// Records one elapsed second of the active question's countdown.
    ///
    /// Returns `None` outside `AwaitingAnswer`: a timer that fires after the
    /// question was answered or advanced past is stale and must not disturb
    /// the session. When the countdown reaches zero the question is revealed
    /// as unanswered (score unchanged) and the snapshot carries the correct
    /// option for feedback.
    pub fn tick(&mut self) -> Option<SessionSnapshot> {
        if self.state != SessionState::AwaitingAnswer {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.selected = None;
            self.state = SessionState::AnswerRevealed;
        }
        Some(self.snapshot())
    }

    /// Submits an answer for the active question.
    ///
    /// A submission processed while `remaining_secs > 0` always wins over the
    /// countdown; once revealed, the answer is final for this question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownOption` when `option` is not among the
    /// active question's choices, and `SessionError::InvalidTransition`
    /// outside `AwaitingAnswer` (including a resubmission before `advance`).
    pub fn submit_answer(&mut self, option: &str) -> Result<SessionSnapshot, SessionError> {
        if self.state != SessionState::AwaitingAnswer {
            return Err(self.invalid("submit_answer"));
        }
        let question = &self.questions[self.current];
        if !question.has_option(option) {
            return Err(SessionError::UnknownOption {
                option: option.to_string(),
            });
        }

        if option == question.answer() {
            self.score += 1;
        }
        self.selected = Some(option.to_string());
        self.state = SessionState::AnswerRevealed;
        Ok(self.snapshot())
    }

    /// Moves past the revealed question.
    ///
    /// Yields the next question's snapshot with a fresh countdown, or the
    /// terminal [`SessionResult`] after the last question. The caller is
    /// expected to restart its timer on `Next`; stale ticks are absorbed by
    /// [`QuizSession::tick`] regardless.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is
    /// `AnswerRevealed`.
    pub fn advance(&mut self) -> Result<SessionOutcome, SessionError> {
        if self.state != SessionState::AnswerRevealed {
            return Err(self.invalid("advance"));
        }

        self.current += 1;
        self.selected = None;

        if self.current < self.questions.len() {
            self.remaining_secs = self.duration_secs;
            self.state = SessionState::AwaitingAnswer;
            Ok(SessionOutcome::Next(self.snapshot()))
        } else {
            self.state = SessionState::Completed;
            Ok(SessionOutcome::Finished(self.result()))
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// Score summary; `total` is always the session's full question count.
    #[must_use]
    pub fn result(&self) -> SessionResult {
        SessionResult::new(self.score, self.questions.len() as u32)
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            state: self.state,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        let question = &self.questions[self.current];
        let reveal = (self.state == SessionState::AnswerRevealed).then(|| RevealedAnswer {
            selected: self.selected.clone(),
            correct_option: question.answer().to_string(),
            is_correct: self.selected.as_deref() == Some(question.answer()),
        });

        SessionSnapshot {
            question_index: self.current,
            total: self.questions.len(),
            question_text: question.text().to_string(),
            options: question.options().to_vec(),
            remaining_secs: self.remaining_secs,
            score: self.score,
            reveal,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question::new(
            text,
            options.iter().map(ToString::to_string).collect(),
            answer,
        )
        .unwrap()
    }

    fn arithmetic_question() -> Question {
        question("2+2?", &["3", "4", "5"], "4")
    }

    fn three_question_session(duration_secs: u32) -> QuizSession {
        let questions = vec![
            question("Capital of France?", &["Paris", "London", "Berlin"], "Paris"),
            question("What is 5 + 3?", &["5", "8", "9", "7"], "8"),
            question("Android language?", &["Swift", "Kotlin", "Python"], "Kotlin"),
        ];
        QuizSession::new(questions, duration_secs).unwrap()
    }

    #[test]
    fn construction_rejects_empty_list() {
        let err = QuizSession::new(Vec::new(), 15).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn construction_rejects_zero_duration() {
        let err = QuizSession::new(vec![arithmetic_question()], 0).unwrap_err();
        assert_eq!(err, SessionError::ZeroDuration);
    }

    #[test]
    fn start_enters_awaiting_answer_on_first_question() {
        let mut session = three_question_session(15);
        assert_eq!(session.state(), SessionState::NotStarted);

        let snapshot = session.start().unwrap();

        assert_eq!(session.state(), SessionState::AwaitingAnswer);
        assert_eq!(snapshot.question_index, 0);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.remaining_secs, 15);
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.reveal.is_none());
    }

    #[test]
    fn second_start_is_an_invalid_transition() {
        let mut session = three_question_session(15);
        session.start().unwrap();

        let err = session.start().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                operation: "start",
                state: SessionState::AwaitingAnswer,
            }
        );
    }

    #[test]
    fn correct_answer_increments_score_and_reveals() {
        let mut session = three_question_session(15);
        session.start().unwrap();

        let snapshot = session.submit_answer("Paris").unwrap();

        assert_eq!(snapshot.score, 1);
        assert_eq!(session.state(), SessionState::AnswerRevealed);
        let reveal = snapshot.reveal.unwrap();
        assert!(reveal.is_correct);
        assert_eq!(reveal.correct_option, "Paris");
        assert_eq!(reveal.selected.as_deref(), Some("Paris"));
    }

    #[test]
    fn wrong_answer_leaves_score_unchanged() {
        let mut session = three_question_session(15);
        session.start().unwrap();

        let snapshot = session.submit_answer("London").unwrap();

        assert_eq!(snapshot.score, 0);
        let reveal = snapshot.reveal.unwrap();
        assert!(!reveal.is_correct);
        assert_eq!(reveal.correct_option, "Paris");
        assert_eq!(reveal.selected.as_deref(), Some("London"));
    }

    #[test]
    fn unknown_option_is_rejected_without_state_change() {
        let mut session = three_question_session(15);
        session.start().unwrap();

        let err = session.submit_answer("Madrid").unwrap_err();

        assert_eq!(
            err,
            SessionError::UnknownOption {
                option: "Madrid".into()
            }
        );
        assert_eq!(session.state(), SessionState::AwaitingAnswer);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn resubmission_before_advance_fails() {
        let mut session = three_question_session(15);
        session.start().unwrap();
        session.submit_answer("Paris").unwrap();

        let err = session.submit_answer("London").unwrap_err();

        assert_eq!(
            err,
            SessionError::InvalidTransition {
                operation: "submit_answer",
                state: SessionState::AnswerRevealed,
            }
        );
        // The first answer stays final.
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn countdown_expiry_reveals_unanswered() {
        let mut session = QuizSession::new(vec![arithmetic_question()], 15).unwrap();
        session.start().unwrap();

        for expected in (1..15).rev() {
            let snapshot = session.tick().unwrap();
            assert_eq!(snapshot.remaining_secs, expected);
            assert!(snapshot.reveal.is_none());
            assert_eq!(session.state(), SessionState::AwaitingAnswer);
        }

        let snapshot = session.tick().unwrap();
        assert_eq!(snapshot.remaining_secs, 0);
        assert_eq!(session.state(), SessionState::AnswerRevealed);
        let reveal = snapshot.reveal.unwrap();
        assert!(!reveal.is_correct);
        assert_eq!(reveal.selected, None);
        assert_eq!(reveal.correct_option, "4");
        assert_eq!(session.score(), 0);

        match session.advance().unwrap() {
            SessionOutcome::Finished(result) => assert_eq!(result, SessionResult::new(0, 1)),
            SessionOutcome::Next(_) => panic!("single-question session should finish"),
        }
    }

    #[test]
    fn stale_tick_is_ignored_after_reveal_and_after_completion() {
        let mut session = QuizSession::new(vec![arithmetic_question()], 15).unwrap();
        assert!(session.tick().is_none());

        session.start().unwrap();
        session.submit_answer("4").unwrap();
        assert!(session.tick().is_none());
        assert_eq!(session.state(), SessionState::AnswerRevealed);

        session.advance().unwrap();
        assert!(session.tick().is_none());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn submission_wins_while_time_remains() {
        let mut session = QuizSession::new(vec![arithmetic_question()], 2).unwrap();
        session.start().unwrap();

        let snapshot = session.tick().unwrap();
        assert_eq!(snapshot.remaining_secs, 1);

        // One second left at the moment of processing: the submission lands.
        let snapshot = session.submit_answer("4").unwrap();
        assert!(snapshot.reveal.unwrap().is_correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_resets_countdown_and_selection() {
        let mut session = three_question_session(10);
        session.start().unwrap();
        for _ in 0..4 {
            session.tick().unwrap();
        }
        session.submit_answer("Paris").unwrap();

        let snapshot = match session.advance().unwrap() {
            SessionOutcome::Next(snapshot) => snapshot,
            SessionOutcome::Finished(_) => panic!("two questions remain"),
        };

        assert_eq!(snapshot.question_index, 1);
        assert_eq!(snapshot.remaining_secs, 10);
        assert_eq!(snapshot.score, 1);
        assert!(snapshot.reveal.is_none());
        assert_eq!(session.state(), SessionState::AwaitingAnswer);
    }

    #[test]
    fn advance_outside_reveal_fails() {
        let mut session = three_question_session(15);
        let err = session.advance().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                operation: "advance",
                state: SessionState::NotStarted,
            }
        );

        session.start().unwrap();
        assert!(session.advance().is_err());
    }

    #[test]
    fn full_round_trip_reaches_completed_after_each_cycle() {
        let mut session = three_question_session(15);
        session.start().unwrap();

        session.submit_answer("Paris").unwrap();
        match session.advance().unwrap() {
            SessionOutcome::Next(snapshot) => assert_eq!(snapshot.question_index, 1),
            SessionOutcome::Finished(_) => panic!("finished too early"),
        }

        session.submit_answer("5").unwrap();
        match session.advance().unwrap() {
            SessionOutcome::Next(snapshot) => assert_eq!(snapshot.question_index, 2),
            SessionOutcome::Finished(_) => panic!("finished too early"),
        }

        session.submit_answer("Kotlin").unwrap();
        let result = match session.advance().unwrap() {
            SessionOutcome::Finished(result) => result,
            SessionOutcome::Next(_) => panic!("third question was the last"),
        };

        assert_eq!(result, SessionResult::new(2, 3));
        assert!(session.is_complete());
    }

    #[test]
    fn completed_session_rejects_every_operation() {
        let mut session = QuizSession::new(vec![arithmetic_question()], 15).unwrap();
        session.start().unwrap();
        session.submit_answer("4").unwrap();
        session.advance().unwrap();

        assert!(matches!(
            session.start(),
            Err(SessionError::InvalidTransition {
                state: SessionState::Completed,
                ..
            })
        ));
        assert!(session.submit_answer("4").is_err());
        assert!(session.advance().is_err());
        assert!(session.tick().is_none());
        assert_eq!(session.result(), SessionResult::new(1, 1));
    }

    #[test]
    fn single_question_example_scores_one_of_one() {
        let mut session = QuizSession::new(vec![arithmetic_question()], 15).unwrap();

        let snapshot = session.start().unwrap();
        assert_eq!(snapshot.question_index, 0);
        assert_eq!(snapshot.remaining_secs, 15);

        let snapshot = session.submit_answer("4").unwrap();
        assert!(snapshot.reveal.unwrap().is_correct);
        assert_eq!(snapshot.score, 1);

        match session.advance().unwrap() {
            SessionOutcome::Finished(result) => {
                assert_eq!(result, SessionResult::new(1, 1));
            }
            SessionOutcome::Next(_) => panic!("only one question"),
        }
    }
}
