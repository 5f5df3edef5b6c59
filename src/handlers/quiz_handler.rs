use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::SelectAnswerRequest,
    models::dto::response::{QuizResultResponse, QuizView},
};

fn no_quiz_loaded() -> AppError {
    AppError::NotFound("No quiz loaded for this session".to_string())
}

/// The explicit generate-quiz action. An existing quiz is replaced only once
/// generation and parsing have both succeeded; any failure leaves it in
/// whatever state it was in.
#[post("/api/sessions/{id}/quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    if !session.has_document() {
        return Err(AppError::ValidationError(
            "No document uploaded for this session".to_string(),
        ));
    }

    let quiz = state
        .quiz_service
        .generate_quiz(&session.text_content)
        .await?;
    session.quiz.unload();
    session.quiz.load(quiz)?;

    let view = QuizView::from_session(&session.quiz).ok_or_else(no_quiz_loaded)?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}/quiz")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let session = session.lock().await;

    let view = QuizView::from_session(&session.quiz).ok_or_else(no_quiz_loaded)?;
    Ok(HttpResponse::Ok().json(view))
}

#[put("/api/sessions/{id}/quiz/answer")]
async fn select_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    let request = request.into_inner();
    session
        .quiz
        .select_answer(request.question_index, request.selected_option)?;

    let view = QuizView::from_session(&session.quiz).ok_or_else(no_quiz_loaded)?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/quiz/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    let score = session.quiz.submit()?;
    log::info!("session {}: quiz submitted, score {}", id, score);

    let result = QuizResultResponse::from_session(&session.quiz).ok_or_else(no_quiz_loaded)?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/sessions/{id}/quiz/reset")]
async fn reset_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    session.quiz.reset()?;

    let view = QuizView::from_session(&session.quiz).ok_or_else(no_quiz_loaded)?;
    Ok(HttpResponse::Ok().json(view))
}

#[delete("/api/sessions/{id}/quiz")]
async fn unload_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    session.quiz.unload();
    Ok(HttpResponse::NoContent().finish())
}
