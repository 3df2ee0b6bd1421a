use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{MissedTickBehavior, interval};

use quiz_core::model::{
    Difficulty, QuizSession, SessionOutcome, SessionResult, SessionSnapshot,
};
use services::{
    DEFAULT_QUESTION_COUNT, DEFAULT_QUESTION_SECS, LocalQuestionProvider, OpenTriviaConfig,
    OpenTriviaProvider, QuizReport, QuizService, QuizServiceError, QuizSettings,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDifficulty { raw: String },
    InvalidCount { raw: String },
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (easy, medium or hard)")
            }
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    difficulty: Difficulty,
    count: u8,
    duration: u32,
    offline: bool,
    url: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            count: DEFAULT_QUESTION_COUNT,
            duration: DEFAULT_QUESTION_SECS,
            offline: false,
            url: None,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ArgsError> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--difficulty" => {
                let raw = require_value(&mut args, "--difficulty")?;
                parsed.difficulty = raw
                    .parse()
                    .map_err(|_| ArgsError::InvalidDifficulty { raw })?;
            }
            "--count" => {
                let raw = require_value(&mut args, "--count")?;
                parsed.count = match raw.parse() {
                    Ok(count) if count >= 1 => count,
                    _ => return Err(ArgsError::InvalidCount { raw }),
                };
            }
            "--duration" => {
                let raw = require_value(&mut args, "--duration")?;
                parsed.duration = match raw.parse() {
                    Ok(secs) if secs >= 1 => secs,
                    _ => return Err(ArgsError::InvalidDuration { raw }),
                };
            }
            "--offline" => parsed.offline = true,
            "--url" => parsed.url = Some(require_value(&mut args, "--url")?),
            other => return Err(ArgsError::UnknownArg(other.to_string())),
        }
    }

    Ok(parsed)
}

/// Build a session from the remote provider, falling back to the built-in
/// question set when the fetch fails.
async fn build_session(
    args: &Args,
    settings: QuizSettings,
) -> Result<QuizSession, QuizServiceError> {
    let local = QuizService::new(Arc::new(LocalQuestionProvider::new()))
        .with_settings(settings.clone());

    if args.offline {
        return local.new_session(args.difficulty).await;
    }

    let config = match &args.url {
        Some(url) => OpenTriviaConfig {
            base_url: url.clone(),
        },
        None => OpenTriviaConfig::from_env(),
    };
    let remote =
        QuizService::new(Arc::new(OpenTriviaProvider::new(config))).with_settings(settings);

    match remote.new_session(args.difficulty).await {
        Ok(session) => Ok(session),
        Err(err) => {
            eprintln!("could not fetch questions ({err}); using the built-in set");
            local.new_session(args.difficulty).await
        }
    }
}

fn render_question(snapshot: &SessionSnapshot) {
    println!();
    println!(
        "{}/{}: {}  [{}s]",
        snapshot.question_index + 1,
        snapshot.total,
        snapshot.question_text,
        snapshot.remaining_secs
    );
    for (index, option) in snapshot.options.iter().enumerate() {
        println!("  {}) {}", index + 1, option);
    }
}

/// Resolve typed input to an option: a 1-based number or the option text.
fn choose(options: &[String], input: &str) -> Option<String> {
    if let Ok(number) = input.parse::<usize>() {
        if (1..=options.len()).contains(&number) {
            return Some(options[number - 1].clone());
        }
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .cloned()
}

/// Drive one session to completion: stdin answers racing a one-second tick.
///
/// The session itself holds all game state; this loop only renders snapshots
/// and forwards intents. The ticker is reset on every new question; a tick
/// that fires after a reveal is absorbed by the engine either way.
async fn play(
    session: &mut QuizSession,
    mut current: SessionSnapshot,
) -> Result<SessionResult, Box<dyn std::error::Error>> {
    render_question(&current);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval fires immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(snapshot) = session.tick() else { continue };
                if let Some(reveal) = &snapshot.reveal {
                    println!("Time's up! The answer was {}.", reveal.correct_option);
                    match session.advance()? {
                        SessionOutcome::Next(next) => {
                            current = next;
                            ticker.reset();
                            render_question(&current);
                        }
                        SessionOutcome::Finished(result) => return Ok(result),
                    }
                } else {
                    current = snapshot;
                    if current.remaining_secs <= 5 {
                        println!("  {}s left", current.remaining_secs);
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed; score what was played so far
                    return Ok(session.result());
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let Some(choice) = choose(&current.options, input) else {
                    println!("Pick 1-{} or type the option text.", current.options.len());
                    continue;
                };

                let snapshot = session.submit_answer(&choice)?;
                if let Some(reveal) = &snapshot.reveal {
                    if reveal.is_correct {
                        println!("Correct!");
                    } else {
                        println!("Wrong! The answer was {}.", reveal.correct_option);
                    }
                }
                match session.advance()? {
                    SessionOutcome::Next(next) => {
                        current = next;
                        ticker.reset();
                        render_question(&current);
                    }
                    SessionOutcome::Finished(result) => return Ok(result),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(env::args().skip(1))?;
    let settings = QuizSettings {
        question_count: args.count,
        question_secs: args.duration,
    };

    let mut session = build_session(&args, settings).await?;
    println!(
        "Difficulty: {} — {} questions, {}s each. Answer with the option number.",
        args.difficulty,
        session.total(),
        session.duration_secs()
    );

    let first = session.start()?;
    let result = play(&mut session, first).await?;

    let report = QuizReport::new(result, args.difficulty);
    println!();
    println!("Quiz completed!");
    println!("Difficulty: {}", report.difficulty);
    println!(
        "Your score: {}/{} ({}%)",
        report.score,
        report.total,
        report.percent()
    );
    println!("{}", report.category());

    Ok(())
}
