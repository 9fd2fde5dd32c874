//! Error types for paper-tracker
//!
//! Every failure on the paper endpoints is a 500 carrying a fixed label for
//! the operation and the underlying message as `details`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Paper creation failed
    #[error("Failed to add paper: {0}")]
    Create(String),

    /// Paper listing failed
    #[error("Failed to fetch papers: {0}")]
    Fetch(String),

    /// Analytics aggregation failed
    #[error("Failed to fetch analytics: {0}")]
    Analytics(String),
}

impl ApiError {
    /// Client-facing label for the failed operation
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::Create(_) => "Failed to add paper",
            ApiError::Fetch(_) => "Failed to fetch papers",
            ApiError::Analytics(_) => "Failed to fetch analytics",
        }
    }

    /// Underlying failure message
    pub fn details(&self) -> &str {
        match self {
            ApiError::Create(details) | ApiError::Fetch(details) | ApiError::Analytics(details) => {
                details
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}", self);

        let body = Json(json!({
            "error": self.label(),
            "details": self.details(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = ApiError::Fetch("disk I/O error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Failed to fetch papers");
        assert_eq!(body["details"], "disk I/O error");
    }

    #[test]
    fn test_display_includes_label_and_details() {
        let err = ApiError::Create("NOT NULL constraint failed: papers.title".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to add paper: NOT NULL constraint failed: papers.title"
        );
    }
}
