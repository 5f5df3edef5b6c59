use std::sync::Arc;

use crate::constants::prompts::{QUIZ_GENERATION_PROMPT, QUIZ_SOURCE_CHAR_LIMIT};
use crate::errors::AppResult;
use crate::models::domain::question::QuizSet;
use crate::providers::generation::TextGenerator;
use crate::services::helpers::truncate_chars;
use crate::services::quiz_parser;

/// The quiz requestor: builds the generation instruction over a bounded
/// prefix of the source text, invokes the generation capability exactly once
/// and hands the raw output to the parser. No retries.
pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn build_prompt(source_text: &str) -> String {
        QUIZ_GENERATION_PROMPT.replace("{text}", truncate_chars(source_text, QUIZ_SOURCE_CHAR_LIMIT))
    }

    pub async fn generate_quiz(&self, source_text: &str) -> AppResult<QuizSet> {
        let prompt = Self::build_prompt(source_text);
        log::info!(
            "requesting quiz generation over {} source chars",
            truncate_chars(source_text, QUIZ_SOURCE_CHAR_LIMIT).chars().count()
        );

        let raw = self.generator.generate(&prompt).await?;
        let quiz = quiz_parser::parse_quiz(&raw)?;

        log::info!("parsed a quiz of {} questions", quiz.len());
        Ok(quiz)
    }
}
