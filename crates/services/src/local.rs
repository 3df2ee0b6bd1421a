use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use quiz_core::model::{Difficulty, Question};

use crate::error::ProviderError;
use crate::provider::QuestionProvider;

/// Built-in general-knowledge set: (text, options, answer).
///
/// Serves every difficulty band; ordering is randomized per fetch.
const BUILTIN: &[(&str, &[&str], &str)] = &[
    (
        "What is the capital of France?",
        &["Paris", "London", "Berlin", "Madrid"],
        "Paris",
    ),
    ("What is 5 + 3?", &["5", "8", "9", "7"], "8"),
    (
        "Which language is used for Android development?",
        &["Swift", "Kotlin", "JavaScript", "Python"],
        "Kotlin",
    ),
    (
        "Which planet is known as the Red Planet?",
        &["Venus", "Mars", "Jupiter", "Mercury"],
        "Mars",
    ),
    (
        "How many continents are there?",
        &["five", "six", "seven", "eight"],
        "seven",
    ),
    (
        "What is the largest ocean on Earth?",
        &["Atlantic", "Indian", "Arctic", "Pacific"],
        "Pacific",
    ),
    (
        "Which element has the chemical symbol O?",
        &["Gold", "Oxygen", "Osmium", "Silver"],
        "Oxygen",
    ),
    (
        "In which year did the first person walk on the Moon?",
        &["1965", "1969", "1972", "1959"],
        "1969",
    ),
    (
        "What is the longest river in the world?",
        &["Amazon", "Nile", "Yangtze", "Mississippi"],
        "Nile",
    ),
    (
        "Who painted the Mona Lisa?",
        &["Michelangelo", "Raphael", "Leonardo da Vinci", "Donatello"],
        "Leonardo da Vinci",
    ),
    (
        "How many sides does a hexagon have?",
        &["five", "six", "seven", "eight"],
        "six",
    ),
    (
        "What is the smallest prime number?",
        &["0", "1", "2", "3"],
        "2",
    ),
];

/// Offline question provider backed by a static list.
///
/// Satisfies the same contract as the remote provider for demo and fallback
/// use: question order and option order are shuffled on every fetch, and
/// `count` is honored by truncation (a fetch never returns more than the
/// built-in list holds).
#[derive(Debug, Clone, Default)]
pub struct LocalQuestionProvider {
    seed: Option<u64>,
}

impl LocalQuestionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle permutation, for deterministic tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn pick<R: Rng + ?Sized>(count: u8, rng: &mut R) -> Result<Vec<Question>, ProviderError> {
        let mut records: Vec<&(&str, &[&str], &str)> = BUILTIN.iter().collect();
        records.shuffle(rng);
        records.truncate(usize::from(count));

        let mut questions = Vec::with_capacity(records.len());
        for (text, options, answer) in records {
            let mut options: Vec<String> = options.iter().map(ToString::to_string).collect();
            options.shuffle(rng);
            questions.push(Question::new(*text, options, *answer)?);
        }

        if questions.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(questions)
    }
}

#[async_trait]
impl QuestionProvider for LocalQuestionProvider {
    async fn fetch_questions(
        &self,
        count: u8,
        _difficulty: Difficulty,
    ) -> Result<Vec<Question>, ProviderError> {
        match self.seed {
            Some(seed) => Self::pick(count, &mut StdRng::seed_from_u64(seed)),
            None => Self::pick(count, &mut rand::rng()),
        }
    }
}
