use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::{Question, QuizSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    #[default]
    Empty,
    Ready,
    Submitted,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::Empty => "empty",
            QuizPhase::Ready => "ready",
            QuizPhase::Submitted => "submitted",
        }
    }
}

/// Per-question view of a graded attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOutcome<'a> {
    pub question: &'a Question,
    pub selected: Option<&'a str>,
    pub is_correct: bool,
}

/// State machine for one quiz attempt. Owns the question set and the answer
/// sheet; every operation is guarded by the current phase and leaves the
/// session untouched when it is rejected.
#[derive(Debug, Default)]
pub struct QuizSession {
    phase: QuizPhase,
    quiz: Option<QuizSet>,
    answers: Vec<Option<String>>,
    score: Option<usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn quiz(&self) -> Option<&QuizSet> {
        self.quiz.as_ref()
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    /// Defined only once the attempt has been submitted.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    fn illegal(&self, action: &'static str) -> AppError {
        AppError::IllegalStateTransition {
            action,
            state: self.phase.as_str(),
        }
    }

    /// Loads a question set into an empty session and hands out a fresh,
    /// all-unset answer sheet.
    pub fn load(&mut self, quiz: QuizSet) -> AppResult<()> {
        if self.phase != QuizPhase::Empty {
            return Err(self.illegal("load"));
        }
        self.answers = vec![None; quiz.len()];
        self.quiz = Some(quiz);
        self.score = None;
        self.phase = QuizPhase::Ready;
        Ok(())
    }

    /// Records (or clears, when `selection` is `None`) the answer for one
    /// question. The selection must be one of that question's options.
    pub fn select_answer(&mut self, index: usize, selection: Option<String>) -> AppResult<()> {
        if self.phase != QuizPhase::Ready {
            return Err(self.illegal("select an answer"));
        }
        let quiz = self.quiz.as_ref().ok_or_else(|| self.illegal("select an answer"))?;
        let question = quiz.get(index).ok_or_else(|| {
            AppError::InvalidSelection(format!(
                "question index {} out of range for quiz of {} questions",
                index,
                quiz.len()
            ))
        })?;

        if let Some(text) = &selection {
            if !question.has_option(text) {
                return Err(AppError::InvalidSelection(format!(
                    "'{}' is not an option of question {}",
                    text,
                    index + 1
                )));
            }
        }

        self.answers[index] = selection;
        Ok(())
    }

    /// Grades the answer sheet. An unset slot never matches. The score is
    /// frozen until the next `reset` or `unload`.
    pub fn submit(&mut self) -> AppResult<usize> {
        if self.phase != QuizPhase::Ready {
            return Err(self.illegal("submit"));
        }
        let quiz = self.quiz.as_ref().ok_or_else(|| self.illegal("submit"))?;

        let score = quiz
            .iter()
            .zip(self.answers.iter())
            .filter(|(question, answer)| {
                answer.as_deref() == Some(question.correct_option())
            })
            .count();

        self.score = Some(score);
        self.phase = QuizPhase::Submitted;
        Ok(score)
    }

    /// Retry: keeps the same questions, clears the sheet and the score.
    pub fn reset(&mut self) -> AppResult<()> {
        if self.phase != QuizPhase::Submitted {
            return Err(self.illegal("reset"));
        }
        for slot in &mut self.answers {
            *slot = None;
        }
        self.score = None;
        self.phase = QuizPhase::Ready;
        Ok(())
    }

    /// Valid from any state; discards everything.
    pub fn unload(&mut self) {
        self.phase = QuizPhase::Empty;
        self.quiz = None;
        self.answers.clear();
        self.score = None;
    }

    /// Per-question correctness, available only after submit.
    pub fn outcomes(&self) -> Option<Vec<QuestionOutcome<'_>>> {
        if self.phase != QuizPhase::Submitted {
            return None;
        }
        let quiz = self.quiz.as_ref()?;
        Some(
            quiz.iter()
                .zip(self.answers.iter())
                .map(|(question, answer)| QuestionOutcome {
                    question,
                    selected: answer.as_deref(),
                    is_correct: answer.as_deref() == Some(question.correct_option()),
                })
                .collect(),
        )
    }
}
