use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;

use exam_finder::api;
use exam_finder::config::AppConfig;
use exam_finder::services::{ExamCatalog, ExamStore, MockExamCatalog};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    let store = web::Data::new(ExamStore::seeded());
    let catalog: Arc<dyn ExamCatalog> = Arc::new(MockExamCatalog::new());
    let catalog = web::Data::from(catalog);

    log::info!(
        "Starting Exam Finder Backend at http://{}:{}",
        config.host,
        config.port
    );
    log::info!("Exam catalog source: {}", catalog.source_name());
    log::info!("Allowed CORS origin: {}", config.cors_allowed_origin);

    let origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(api::cors(&origin))
            .wrap(Logger::default())
            .configure(api::configure(store.clone(), catalog.clone()))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
