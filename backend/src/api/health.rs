use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Welcome to the Exam Finder API";

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": WELCOME_MESSAGE }))
}

/// Liveness probe
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    #[actix_rt::test]
    async fn test_root_returns_welcome() {
        let app = actix_test::init_service(App::new().service(root)).await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Welcome to the Exam Finder API" }));
    }

    #[actix_rt::test]
    async fn test_health_is_ok_every_time() {
        let app = actix_test::init_service(App::new().service(root).service(health_check)).await;

        for _ in 0..3 {
            let req = actix_test::TestRequest::get().uri("/health").to_request();
            let body: Value = actix_test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, json!({ "status": "ok" }));
        }
    }
}
