pub mod chat;
pub mod question;
pub mod quiz_session;
pub use chat::{ChatMessage, ChatRole};
pub use question::{Question, QuizSet};
pub use quiz_session::{QuizPhase, QuizSession};
