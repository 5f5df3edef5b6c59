//! Prompt templates and the character budgets applied to the text that gets
//! interpolated into them. Templates use a literal `{text}` placeholder that
//! the services substitute before invoking the generation provider.

/// Maximum number of source characters included in a quiz generation prompt.
pub const QUIZ_SOURCE_CHAR_LIMIT: usize = 12_000;

/// Maximum number of source characters included in a summary prompt.
pub const SUMMARY_SOURCE_CHAR_LIMIT: usize = 10_000;

/// Fallback context budget for question answering when no index is available.
pub const QA_CONTEXT_CHAR_LIMIT: usize = 8_000;

/// Maximum number of rendered chat-history characters fed back into QA prompts.
pub const CHAT_HISTORY_CHAR_LIMIT: usize = 2_000;

/// Number of chunks retrieved as context for a grounded question.
pub const RETRIEVAL_TOP_K: usize = 4;

/// The textual contract the quiz parser depends on: sequential `Q<n>:`
/// numbering, options labeled `A.`-`D.`, the correct option suffixed with
/// `<-- correct`, and a total of 3 to 7 questions. Deviations the model
/// introduces are handled defensively by the parser, not by tightening this
/// prompt.
pub const QUIZ_GENERATION_PROMPT: &str = "\
Generate 3 to 7 multiple choice questions with 4 options each from the content below.
Focus exclusively on conceptual questions only.
Number them sequentially as Q1, Q2, etc.
Mark the correct option clearly using '<-- correct'.
Format each question exactly like this example:
Q1: What is the capital of France?
A. London
B. Paris <-- correct
C. Berlin
D. Madrid
For mathematical questions, use LaTeX format surrounded by $ symbols.

Content:
{text}";

pub const SUMMARY_PROMPT: &str = "\
Generate a comprehensive summary of the following content. Include:
1. Key concepts and main ideas
2. Important formulas and equations (presented in LaTeX format between $$ symbols)
3. Critical relationships and dependencies
4. Practical applications or examples mentioned

Structure the summary with clear sections and bullet points.

Content:
{text}";

pub const QA_PROMPT: &str = "\
Use the following conversation history and document context to answer the question.

CONVERSATION HISTORY:
{history}

DOCUMENT CONTEXT:
{context}

QUESTION: {question}

Answer in detail with relevant formulas in LaTeX format ($$...$$). \
If unsure, say you don't know.";
