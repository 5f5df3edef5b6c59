use std::sync::Arc;

use crate::constants::prompts::{
    CHAT_HISTORY_CHAR_LIMIT, QA_CONTEXT_CHAR_LIMIT, QA_PROMPT, RETRIEVAL_TOP_K, SUMMARY_PROMPT,
    SUMMARY_SOURCE_CHAR_LIMIT,
};
use crate::errors::AppResult;
use crate::models::domain::chat::{render_history, ChatMessage};
use crate::providers::generation::TextGenerator;
use crate::providers::retrieval::{chunk_text, DocumentIndex, EmbeddingProvider, CHUNK_OVERLAP, CHUNK_SIZE};
use crate::services::helpers::truncate_chars;

const QUIZ_COMMANDS: [&str; 3] = ["/quiz", "generate quiz", "create quiz"];
const SUMMARY_COMMANDS: [&str; 3] = ["/summary", "generate summary", "summarize"];

/// What a chat turn asks for. Command tokens and their phrase aliases are
/// matched case-insensitively against the start of the trimmed message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    GenerateQuiz,
    GenerateSummary,
    Question(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let normalized = input.trim().to_lowercase();
        if QUIZ_COMMANDS.iter().any(|c| normalized.starts_with(c)) {
            Command::GenerateQuiz
        } else if SUMMARY_COMMANDS.iter().any(|c| normalized.starts_with(c)) {
            Command::GenerateSummary
        } else {
            Command::Question(input.trim().to_string())
        }
    }
}

/// Summary generation and document-grounded question answering.
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl AssistantService {
    pub fn new(generator: Arc<dyn TextGenerator>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            generator,
            embedder,
        }
    }

    /// Chunks a freshly extracted document and embeds the chunks into a
    /// similarity index for QA grounding.
    pub async fn build_index(&self, text: &str) -> AppResult<DocumentIndex> {
        let chunks = chunk_text(text, CHUNK_SIZE, CHUNK_OVERLAP);
        log::info!("embedding {} chunks for retrieval", chunks.len());
        let vectors = self.embedder.embed(&chunks).await?;
        DocumentIndex::new(chunks, vectors)
    }

    pub async fn generate_summary(&self, text: &str) -> AppResult<String> {
        let prompt = SUMMARY_PROMPT.replace("{text}", truncate_chars(text, SUMMARY_SOURCE_CHAR_LIMIT));
        self.generator.generate(&prompt).await
    }

    /// Answers a question grounded in the document: retrieved chunks when an
    /// index exists, a bounded text prefix otherwise, plus recent chat
    /// history.
    pub async fn answer_question(
        &self,
        question: &str,
        text: &str,
        index: Option<&DocumentIndex>,
        history: &[ChatMessage],
    ) -> AppResult<String> {
        let context = match index {
            Some(index) if !index.is_empty() => {
                let query_vec = self
                    .embedder
                    .embed(&[question.to_string()])
                    .await?
                    .into_iter()
                    .next()
                    .unwrap_or_default();
                index.search(&query_vec, RETRIEVAL_TOP_K).join("\n\n")
            }
            _ => truncate_chars(text, QA_CONTEXT_CHAR_LIMIT).to_string(),
        };

        let prompt = QA_PROMPT
            .replace("{history}", &render_history(history, CHAT_HISTORY_CHAR_LIMIT))
            .replace("{context}", &context)
            .replace("{question}", question);

        self.generator.generate(&prompt).await
    }
}
