use serde::Serialize;

use crate::models::domain::quiz_session::{QuizPhase, QuizSession};

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentUploadedResponse {
    pub file_name: String,
    pub characters: usize,
    pub indexed_chunks: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// What a quiz taker is allowed to see: prompts, options and their own
/// selections. Correct answers are deliberately absent until submission.
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub question_count: usize,
    pub questions: Vec<QuizQuestionView>,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionView {
    pub prompt: String,
    pub options: Vec<String>,
    pub selected_option: Option<String>,
}

impl QuizView {
    /// `None` when no quiz is loaded.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let quiz = session.quiz()?;
        let questions = quiz
            .iter()
            .zip(session.answers().iter())
            .map(|(question, answer)| QuizQuestionView {
                prompt: question.prompt().to_string(),
                options: question.options().to_vec(),
                selected_option: answer.clone(),
            })
            .collect();

        Some(Self {
            phase: session.phase(),
            question_count: quiz.len(),
            questions,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResultView>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResultView {
    pub prompt: String,
    pub selected_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
}

impl QuizResultResponse {
    /// `None` unless the session has been submitted.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let outcomes = session.outcomes()?;
        let results = outcomes
            .iter()
            .map(|outcome| QuestionResultView {
                prompt: outcome.question.prompt().to_string(),
                selected_option: outcome.selected.map(str::to_string),
                correct_option: outcome.question.correct_option().to_string(),
                is_correct: outcome.is_correct,
            })
            .collect();

        Some(Self {
            score: session.score()?,
            total: session.quiz()?.len(),
            results,
        })
    }
}
