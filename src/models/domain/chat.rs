use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Human,
    Ai,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Human,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Renders history the way the QA prompt expects it, one `Human:`/`AI:` line
/// per message, capped at `char_limit` characters (older messages are cut
/// first).
pub fn render_history(history: &[ChatMessage], char_limit: usize) -> String {
    let mut rendered = String::new();
    for msg in history {
        let label = match msg.role {
            ChatRole::Human => "Human",
            ChatRole::Ai => "AI",
        };
        rendered.push_str(label);
        rendered.push_str(": ");
        rendered.push_str(&msg.content);
        rendered.push('\n');
    }
    if rendered.chars().count() > char_limit {
        let start = rendered
            .char_indices()
            .rev()
            .take(char_limit)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        rendered = rendered[start..].to_string();
    }
    rendered
}
