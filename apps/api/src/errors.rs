use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parse::extractor::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(err) => {
                tracing::error!("Extraction error: {err}");
                match err {
                    ExtractError::Pdf(_) => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "EXTRACTION_ERROR",
                        "Could not extract text from the uploaded file".to_string(),
                    ),
                    ExtractError::Task(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "EXTRACTION_ERROR",
                        "Text extraction failed internally".to_string(),
                    ),
                }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    #[tokio::test]
    async fn test_extraction_task_failure_maps_to_500() {
        let join_err = tokio::task::spawn_blocking(|| {
            panic!("boom");
        })
        .await
        .unwrap_err();

        let response = AppError::Extraction(ExtractError::Task(join_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "EXTRACTION_ERROR");
    }
}
