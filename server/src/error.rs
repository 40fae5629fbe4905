//! HTTP error mapping

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use export::ExportError;
use generation::GenerationError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Export(ExportError::NoSlides) => StatusCode::BAD_REQUEST,
            ApiError::Generation(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::from(GenerationError::Validation("missing".into()));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let failed = ApiError::from(GenerationError::failed("timeout"));
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.to_string(), "Failed to generate presentation: timeout");

        let capture = ApiError::from(ExportError::Capture {
            index: 0,
            reason: "x".into(),
        });
        assert_eq!(capture.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::from(ExportError::NoSlides).status_code(), StatusCode::BAD_REQUEST);
    }
}
