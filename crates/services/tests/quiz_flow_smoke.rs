use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{Difficulty, Question, SessionOutcome, SessionState};
use services::{
    LocalQuestionProvider, ProviderError, QuestionProvider, QuizReport, QuizService,
    QuizServiceError, QuizSettings,
};

#[tokio::test]
async fn offline_quiz_plays_to_completion() {
    let provider = Arc::new(LocalQuestionProvider::new().with_seed(17));
    let service = QuizService::new(provider).with_settings(QuizSettings {
        question_count: 5,
        question_secs: 15,
    });

    let mut session = service.new_session(Difficulty::Medium).await.unwrap();
    assert_eq!(session.state(), SessionState::NotStarted);
    assert_eq!(session.total(), 5);

    let mut snapshot = session.start().unwrap();
    assert_eq!(snapshot.remaining_secs, 15);

    let mut correct = 0;
    loop {
        // Always pick the first option; the reveal tells us how it went.
        let choice = snapshot.options[0].clone();
        let revealed = session.submit_answer(&choice).unwrap();
        if revealed.reveal.as_ref().is_some_and(|reveal| reveal.is_correct) {
            correct += 1;
        }

        match session.advance().unwrap() {
            SessionOutcome::Next(next) => snapshot = next,
            SessionOutcome::Finished(result) => {
                assert_eq!(result.total, 5);
                assert_eq!(result.score, correct);

                let report = QuizReport::new(result, Difficulty::Medium);
                assert_eq!(report.total, 5);
                assert_eq!(report.difficulty, Difficulty::Medium);
                break;
            }
        }
    }

    assert!(session.is_complete());
}

#[tokio::test]
async fn timeouts_alone_score_zero() {
    let provider = Arc::new(LocalQuestionProvider::new().with_seed(3));
    let service = QuizService::new(provider).with_settings(QuizSettings {
        question_count: 2,
        question_secs: 3,
    });

    let mut session = service.new_session(Difficulty::Easy).await.unwrap();
    session.start().unwrap();

    loop {
        let snapshot = session.tick().expect("countdown is running");
        if snapshot.reveal.is_none() {
            continue;
        }
        match session.advance().unwrap() {
            SessionOutcome::Next(_) => {}
            SessionOutcome::Finished(result) => {
                assert_eq!(result.score, 0);
                assert_eq!(result.total, 2);
                break;
            }
        }
    }
}

#[tokio::test]
async fn provider_failure_surfaces_without_a_session() {
    struct FailingProvider;

    #[async_trait]
    impl QuestionProvider for FailingProvider {
        async fn fetch_questions(
            &self,
            _count: u8,
            _difficulty: Difficulty,
        ) -> Result<Vec<Question>, ProviderError> {
            Err(ProviderError::Api { code: 2 })
        }
    }

    let service = QuizService::new(Arc::new(FailingProvider));
    let err = service.new_session(Difficulty::Hard).await.unwrap_err();

    assert!(matches!(
        err,
        QuizServiceError::Provider(ProviderError::Api { code: 2 })
    ));
}
