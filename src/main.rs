use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use study_assistant_server::{app_state::AppState, config::Config, handlers};

/// Uploads carry raw document bytes; slide decks get large.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting study assistant server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::create_session)
            .service(handlers::delete_session)
            .service(handlers::upload_document)
            .service(handlers::generate_summary)
            .service(handlers::chat)
            .service(handlers::generate_quiz)
            .service(handlers::get_quiz)
            .service(handlers::select_answer)
            .service(handlers::submit_quiz)
            .service(handlers::reset_quiz)
            .service(handlers::unload_quiz)
    })
    .bind(bind_addr)?
    .run()
    .await
}
