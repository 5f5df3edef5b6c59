use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::DocumentUploadParams,
    models::dto::response::{DocumentUploadedResponse, SessionCreatedResponse, SummaryResponse},
};

#[post("/api/sessions")]
async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let id = state.sessions.create().await;
    log::info!("created session {}", id);

    Ok(HttpResponse::Created().json(SessionCreatedResponse {
        session_id: id.to_string(),
    }))
}

#[delete("/api/sessions/{id}")]
async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.sessions.remove(&id).await?;
    log::info!("deleted session {}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Accepts the raw document bytes, runs extraction and indexing, and only
/// then installs the new document. A failure anywhere leaves the previously
/// uploaded document (and everything derived from it) in place.
#[post("/api/sessions/{id}/document")]
async fn upload_document(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    params: web::Query<DocumentUploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    params.validate()?;
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    let text = state
        .extractor
        .extract(&params.file_name, params.file_type, &body)
        .await?;
    let index = state.assistant_service.build_index(&text).await?;
    let indexed_chunks = index.len();
    let characters = text.chars().count();

    session.replace_document(params.file_name.clone(), text, index);
    log::info!(
        "session {}: installed '{}' ({} chars, {} chunks)",
        id,
        params.file_name,
        characters,
        indexed_chunks
    );

    Ok(HttpResponse::Ok().json(DocumentUploadedResponse {
        file_name: params.file_name.clone(),
        characters,
        indexed_chunks,
    }))
}

#[post("/api/sessions/{id}/summary")]
async fn generate_summary(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let session = session.lock().await;

    if !session.has_document() {
        return Err(AppError::ValidationError(
            "No document uploaded for this session".to_string(),
        ));
    }

    let summary = state
        .assistant_service
        .generate_summary(&session.text_content)
        .await?;

    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
