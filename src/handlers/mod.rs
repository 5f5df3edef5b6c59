pub mod chat_handler;
pub mod quiz_handler;
pub mod session_handler;

pub use chat_handler::chat;
pub use quiz_handler::{
    generate_quiz, get_quiz, reset_quiz, select_answer, submit_quiz, unload_quiz,
};
pub use session_handler::{
    create_session, delete_session, generate_summary, health_check, upload_document,
};
