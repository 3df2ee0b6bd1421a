use std::env;

use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;

use quiz_core::model::{Difficulty, Question};

use crate::error::ProviderError;
use crate::html::decode_entities;
use crate::provider::QuestionProvider;

const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct OpenTriviaConfig {
    pub base_url: String,
}

impl OpenTriviaConfig {
    /// Reads `QUIZ_API_URL`, falling back to the Open Trivia DB endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self { base_url }
    }
}

impl Default for OpenTriviaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
        }
    }
}

//
// ─── PROVIDER ──────────────────────────────────────────────────────────────────
//

/// Question provider backed by the Open Trivia DB HTTP API.
///
/// Decodes the API's HTML-escaped text, shuffles each question's options
/// uniformly, and validates every record before handing it out. Records that
/// fail validation (for example duplicate options after decoding) are
/// skipped rather than failing the whole fetch.
pub struct OpenTriviaProvider {
    client: Client,
    config: OpenTriviaConfig,
}

impl OpenTriviaProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(OpenTriviaConfig::from_env())
    }

    #[must_use]
    pub fn new(config: OpenTriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuestionProvider for OpenTriviaProvider {
    async fn fetch_questions(
        &self,
        count: u8,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, ProviderError> {
        if count == 0 {
            return Err(ProviderError::Empty);
        }

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("amount", count.to_string()),
                ("difficulty", difficulty.to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body: TriviaResponse = response.json().await?;
        if body.response_code != 0 {
            return Err(ProviderError::Api {
                code: body.response_code,
            });
        }

        assemble_questions(body.results, &mut rand::rng())
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaRecord>,
}

#[derive(Debug, Deserialize)]
struct TriviaRecord {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Decode, shuffle and validate raw API records.
///
/// The rng is injected so tests can fix the permutation.
fn assemble_questions<R: Rng + ?Sized>(
    records: Vec<TriviaRecord>,
    rng: &mut R,
) -> Result<Vec<Question>, ProviderError> {
    let mut questions = Vec::with_capacity(records.len());

    for record in records {
        let text = decode_entities(&record.question);
        let answer = decode_entities(&record.correct_answer);

        let mut options: Vec<String> = record
            .incorrect_answers
            .iter()
            .map(|raw| decode_entities(raw))
            .collect();
        options.push(answer.clone());
        options.shuffle(rng);

        // Skip malformed records instead of failing the whole batch.
        if let Ok(question) = Question::new(text, options, answer) {
            questions.push(question);
        }
    }

    if questions.is_empty() {
        return Err(ProviderError::Empty);
    }
    Ok(questions)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
