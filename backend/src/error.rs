use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use serde_json::json;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request body did not match the expected shape
    InvalidBody(String),
    /// The record store lock was poisoned by a panicking writer
    StoreUnavailable,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidBody(msg) => write!(f, "Invalid request body: {}", msg),
            ApiError::StoreUnavailable => write!(f, "Exam record store unavailable"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

/// Error handler for `web::JsonConfig` so every body rejection shares the
/// `{"detail": ...}` shape.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    ApiError::InvalidBody(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::InvalidBody("missing field `courses`".to_string());
        assert!(err.to_string().contains("Invalid request body"));
        assert!(err.to_string().contains("courses"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidBody(String::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::StoreUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn test_error_response_has_detail() {
        let response = ApiError::StoreUnavailable.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["detail"], "Exam record store unavailable");
    }
}
