use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::chat::ChatMessage;
use crate::models::domain::quiz_session::QuizSession;
use crate::providers::retrieval::DocumentIndex;

/// Everything one user's conversation owns: the extracted document, its
/// retrieval index, the chat history and the quiz state machine. Nothing in
/// here is ever shared between sessions.
#[derive(Debug, Default)]
pub struct Session {
    pub created_at: Option<DateTime<Utc>>,
    pub file_name: Option<String>,
    pub text_content: String,
    pub index: Option<DocumentIndex>,
    pub chat_history: Vec<ChatMessage>,
    pub quiz: QuizSession,
}

impl Session {
    pub fn new() -> Self {
        Self {
            created_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    pub fn has_document(&self) -> bool {
        !self.text_content.trim().is_empty()
    }

    /// Installing a new document discards everything derived from the old
    /// one: chat history, index and any loaded quiz.
    pub fn replace_document(&mut self, file_name: String, text: String, index: DocumentIndex) {
        self.file_name = Some(file_name);
        self.text_content = text;
        self.index = Some(index);
        self.chat_history.clear();
        self.quiz.unload();
    }
}

/// In-memory registry of live sessions. Each session sits behind its own
/// `Mutex`; a handler holds that lock for the full duration of an action, so
/// an outstanding generation call excludes every other operation on the same
/// session while leaving all other sessions untouched.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(Session::new())));
        id
    }

    pub async fn get(&self, id: &Uuid) -> AppResult<Arc<Mutex<Session>>> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    pub async fn remove(&self, id: &Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
