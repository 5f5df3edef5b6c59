//! End-to-end quiz flow over the HTTP surface with mocked providers:
//! upload -> generate -> answer -> submit -> retry.

mod common;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use study_assistant_server::{app_state::AppState, config::Config, handlers};

use common::{stub_embedder, MockExtractor, MockGenerator, DOCUMENT_TEXT, RAW_QUIZ};

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .service(handlers::create_session)
                .service(handlers::delete_session)
                .service(handlers::upload_document)
                .service(handlers::generate_quiz)
                .service(handlers::get_quiz)
                .service(handlers::select_answer)
                .service(handlers::submit_quiz)
                .service(handlers::reset_quiz)
                .service(handlers::unload_quiz),
        )
        .await
    };
}

fn state_with_generator(generator: MockGenerator) -> AppState {
    let mut extractor = MockExtractor::new();
    extractor
        .expect_extract()
        .returning(|_, _, _| Ok(DOCUMENT_TEXT.to_string()));

    AppState::with_providers(
        Config::from_env(),
        Arc::new(generator),
        Arc::new(stub_embedder()),
        Arc::new(extractor),
    )
}

async fn create_session_and_upload<S>(app: &S) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let created: Value = test::call_and_read_body_json(
        app,
        test::TestRequest::post().uri("/api/sessions").to_request(),
    )
    .await;
    let session_id = created["session_id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!(
                "/api/sessions/{}/document?file_name=notes.pdf&file_type=pdf",
                session_id
            ))
            .set_payload("%PDF-1.4 fake bytes")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    session_id
}

#[actix_web::test]
async fn full_quiz_flow_generates_grades_and_retries() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Ok(RAW_QUIZ.to_string()));

    let app = init_app!(state_with_generator(generator));
    let session_id = create_session_and_upload(&app).await;

    // Generate: the view exposes prompts and options, never correct answers.
    let quiz: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(quiz["question_count"], 3);
    assert_eq!(quiz["phase"], "ready");
    assert_eq!(quiz["questions"][0]["options"][1], "Paris");
    assert!(quiz["questions"][0].get("correct_option").is_none());

    // Answer two correctly, one incorrectly.
    for (index, option) in [(0, "Paris"), (1, "3"), (2, "O(n)")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/sessions/{}/quiz/answer", session_id))
                .set_json(json!({ "question_index": index, "selected_option": option }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
    }

    let result: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/submit", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(result["score"], 2);
    assert_eq!(result["total"], 3);
    assert_eq!(result["results"][0]["is_correct"], true);
    assert_eq!(result["results"][1]["is_correct"], false);
    assert_eq!(result["results"][1]["correct_option"], "4");

    // Retry: same questions, cleared sheet.
    let after_reset: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/reset", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(after_reset["phase"], "ready");
    assert_eq!(after_reset["question_count"], 3);
    assert_eq!(after_reset["questions"][0]["selected_option"], Value::Null);

    // Submitting an untouched sheet scores zero.
    let result: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/submit", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(result["score"], 0);
}

#[actix_web::test]
async fn generation_failure_reports_count_and_preserves_existing_quiz() {
    let mut generator = MockGenerator::new();
    let mut call = 0;
    generator.expect_generate().returning(move |_| {
        call += 1;
        if call == 1 {
            Ok(RAW_QUIZ.to_string())
        } else {
            // Second generation only manages two blocks.
            Ok("Q1: A?\nA. 1\nB. 2 <-- correct\nC. 3\nD. 4\nQ2: B?\nA. 1\nB. 2 <-- correct\nC. 3\nD. 4\n".to_string())
        }
    });

    let app = init_app!(state_with_generator(generator));
    let session_id = create_session_and_upload(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // Answer one question so we can verify the quiz survives untouched.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/quiz/answer", session_id))
            .set_json(json!({ "question_index": 0, "selected_option": "Paris" }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri(&format!("/api/sessions/{}/quiz", session_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "QUIZ_GENERATION_FAILURE");
    assert_eq!(body["details"]["valid_count"], 2);
    assert!(body["details"]["raw_output"].as_str().unwrap().contains("Q1: A?"));

    // The first quiz and its answer sheet are intact.
    let quiz: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(quiz["question_count"], 3);
    assert_eq!(quiz["questions"][0]["selected_option"], "Paris");
}

#[actix_web::test]
async fn invalid_selection_is_rejected_without_mutation() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Ok(RAW_QUIZ.to_string()));

    let app = init_app!(state_with_generator(generator));
    let session_id = create_session_and_upload(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/quiz/answer", session_id))
            .set_json(json!({ "question_index": 0, "selected_option": "Rome" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "INVALID_SELECTION");

    let quiz: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(quiz["questions"][0]["selected_option"], Value::Null);
}

#[actix_web::test]
async fn wrong_state_operations_conflict() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Ok(RAW_QUIZ.to_string()));

    let app = init_app!(state_with_generator(generator));
    let session_id = create_session_and_upload(&app).await;

    // Submit before any quiz exists.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/submit", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 409);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // Reset before submit.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/reset", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 409);

    // Double submit.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/submit", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz/submit", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "ILLEGAL_STATE_TRANSITION");
}

#[actix_web::test]
async fn unload_discards_the_quiz() {
    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Ok(RAW_QUIZ.to_string()));

    let app = init_app!(state_with_generator(generator));
    let session_id = create_session_and_upload(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/quiz", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = init_app!(state_with_generator(MockGenerator::new()));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/sessions/{}/quiz", uuid::Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);
}
