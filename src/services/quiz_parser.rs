//! Free-text quiz parser. The generation model is asked for a fixed textual
//! convention (`Q<n>:` headers, `A.`-`D.` option lines, a `<-- correct`
//! marker) but nothing guarantees it honors it, so every shape violation is
//! handled by discarding the offending line or block rather than erroring.
//! The only failure mode is ending up with fewer than three valid questions.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::errors::AppError;
use crate::models::domain::question::{Question, QuizSet, OPTIONS_PER_QUESTION};

/// A parse that yields fewer valid questions than this is a failure.
pub const MIN_QUESTIONS: usize = 3;

/// Exact, case-sensitive correctness marker the generation prompt requests.
const CORRECT_MARKER: &str = "<-- correct";

static QUESTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Q\d+:").expect("QUESTION_HEADER is a valid regex pattern"));

static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-D]\.\s+(.+)$").expect("OPTION_LINE is a valid regex pattern"));

/// Tagged failure carrying what the caller needs for diagnostics: how many
/// questions survived validation and the untouched raw model output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("only {valid_count} valid questions were parsed (minimum is {min})", min = MIN_QUESTIONS)]
pub struct QuizParseError {
    pub valid_count: usize,
    pub raw_output: String,
}

impl From<QuizParseError> for AppError {
    fn from(err: QuizParseError) -> Self {
        AppError::QuizGenerationFailure {
            valid_count: err.valid_count,
            raw_output: err.raw_output,
        }
    }
}

/// Parses raw generation output into an ordered quiz. Pure function of its
/// input; parsing the same text twice yields the same quiz.
pub fn parse_quiz(raw: &str) -> Result<QuizSet, QuizParseError> {
    let questions: Vec<Question> = split_blocks(raw)
        .into_iter()
        .filter_map(|block| parse_block(&block))
        .collect();

    if questions.len() < MIN_QUESTIONS {
        return Err(QuizParseError {
            valid_count: questions.len(),
            raw_output: raw.to_string(),
        });
    }

    Ok(QuizSet::new(questions))
}

/// Splits the input at lines that start a `Q<n>:` block. Anything before the
/// first header (model preamble, "Here are your questions:" chatter) is
/// discarded.
fn split_blocks(raw: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in raw.lines() {
        if QUESTION_HEADER.is_match(line) {
            blocks.push(vec![line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }
    blocks
}

/// Validates one block. Returns `None` for any block that cannot produce a
/// well-formed question: blank prompt, fewer than four option lines of the
/// right shape, duplicate option text, or no correct marker among the four
/// retained options.
fn parse_block(lines: &[&str]) -> Option<Question> {
    let header = lines.first()?;
    let prompt = QUESTION_HEADER.replace(header, "").trim().to_string();

    let mut options: Vec<String> = Vec::new();
    let mut correct_index: Option<usize> = None;

    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }
        if options.len() == OPTIONS_PER_QUESTION {
            // Truncate to the first four options; markers on later lines
            // never count.
            break;
        }

        let trimmed = line.trim_end();
        let (body, marked) = match trimmed.strip_suffix(CORRECT_MARKER) {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };

        // Lines that do not look like `A. option text` are formatting drift
        // from the model; drop them silently.
        let Some(caps) = OPTION_LINE.captures(body) else {
            continue;
        };

        if marked {
            // Multiple markers in one block: last retained one wins.
            correct_index = Some(options.len());
        }
        options.push(caps[1].trim().to_string());
    }

    if options.len() < OPTIONS_PER_QUESTION {
        return None;
    }
    let correct = options.get(correct_index?)?.clone();

    Question::new(prompt, options, correct)
}
