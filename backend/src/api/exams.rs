use crate::{
    error::ApiError,
    models::NewExamRecord,
    services::{ExamCatalog, ExamStore, catalog::lookup_exams},
};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Deserialize)]
pub struct ExamLookupRequest {
    pub courses: Vec<String>,
}

// ============================================================================
// Endpoints
// ============================================================================

/// Look up exam details for a list of course codes
#[post("/lookup")]
pub async fn lookup(
    catalog: web::Data<dyn ExamCatalog>,
    body: web::Json<ExamLookupRequest>,
) -> HttpResponse {
    let results = lookup_exams(catalog.get_ref(), &body.courses);

    log::debug!(
        "Looked up {} course(s) against {} catalog, {} result(s)",
        body.courses.len(),
        catalog.source_name(),
        results.len()
    );

    HttpResponse::Ok().json(results)
}

/// List every stored exam record
#[get("")]
pub async fn list_exams(store: web::Data<ExamStore>) -> Result<HttpResponse, ApiError> {
    let records = store.list()?;
    Ok(HttpResponse::Ok().json(records))
}

/// Create a new exam record
#[post("")]
pub async fn create_exam(
    store: web::Data<ExamStore>,
    body: web::Json<NewExamRecord>,
) -> Result<HttpResponse, ApiError> {
    let created = store.create(body.into_inner())?;
    log::info!("Created exam record {} for {}", created.id, created.course_code);
    Ok(HttpResponse::Ok().json(created))
}
