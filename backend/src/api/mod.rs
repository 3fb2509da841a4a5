use crate::{
    error::json_error_handler,
    services::{ExamCatalog, ExamStore},
};
use actix_cors::Cors;
use actix_web::web;

pub mod exams;
pub mod health;

/// JSON body extraction settings shared by every endpoint.
///
/// Bodies without a `Content-Type` header are still parsed as JSON.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// CORS policy for the front-end origin: any method, any header, credentials allowed
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // Info routes
    cfg.service(health::root).service(health::health_check);

    // Exam routes
    cfg.service(
        web::scope("/exams")
            .service(exams::lookup)
            .service(exams::list_exams)
            .service(exams::create_exam),
    );
}

/// Registers shared state, body config and routes in one step.
pub fn configure(
    store: web::Data<ExamStore>,
    catalog: web::Data<dyn ExamCatalog>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config())
            .app_data(store)
            .app_data(catalog);
        config(cfg);
    }
}
