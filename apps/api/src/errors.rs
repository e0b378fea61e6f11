use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    #[error("Unparseable document: {0}")]
    Unparseable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "The uploaded file is too large".to_string(),
            ),
            AppError::Unparseable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPARSEABLE_DOCUMENT",
                msg.clone(),
            ),
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

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_codes_and_envelope() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (AppError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            (
                AppError::Unparseable("no text".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPARSEABLE_DOCUMENT",
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];

        for (err, expected_status, expected_code) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, expected_status);
            assert_eq!(body["error"]["code"], expected_code);
            assert!(body["error"]["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_internal_details_not_leaked() {
        let (_, body) = render(AppError::Internal(anyhow::anyhow!("db password=hunter2"))).await;
        assert!(!body.to_string().contains("hunter2"));
    }
}
