use actix_web::{post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::chat::ChatMessage,
    models::dto::request::ChatRequest,
    models::dto::response::ChatReplyResponse,
    services::assistant_service::Command,
};

/// One chat turn: either a command token (`/quiz`, `/summary` and their
/// phrase aliases) or a free-form question answered against the document.
/// History is only appended once the turn fully succeeds, so a failed turn
/// leaves the conversation exactly as it was.
#[post("/api/sessions/{id}/chat")]
async fn chat(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    if !session.has_document() {
        return Err(AppError::ValidationError(
            "No document uploaded for this session".to_string(),
        ));
    }

    let reply = match Command::parse(&request.message) {
        Command::GenerateQuiz => {
            let quiz = state
                .quiz_service
                .generate_quiz(&session.text_content)
                .await?;
            let count = quiz.len();
            session.quiz.unload();
            session.quiz.load(quiz)?;
            format!("Your quiz is ready: {} questions. Open the quiz to take it.", count)
        }
        Command::GenerateSummary => {
            state
                .assistant_service
                .generate_summary(&session.text_content)
                .await?
        }
        Command::Question(question) => {
            state
                .assistant_service
                .answer_question(
                    &question,
                    &session.text_content,
                    session.index.as_ref(),
                    &session.chat_history,
                )
                .await?
        }
    };

    session.chat_history.push(ChatMessage::human(request.message.clone()));
    session.chat_history.push(ChatMessage::ai(reply.clone()));

    Ok(HttpResponse::Ok().json(ChatReplyResponse { reply }))
}
