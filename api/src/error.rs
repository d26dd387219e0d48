//! Error types for the calculator service
//!
//! Two layers:
//! - `CalcError`: arithmetic core errors, pure and transport-agnostic
//! - `AppError`: HTTP layer errors (wraps core errors for JSON responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Arithmetic core errors
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Could not convert {0} to a number")]
    Coercion(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// HTTP layer errors - used by request handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

/// Error response body, always `{"error": <message>}`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Calc(CalcError::DivisionByZero) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Calc(CalcError::Coercion(_)) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(msg) => {
                // Never leak internal detail to the client.
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message_is_fixed() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn coercion_message_names_the_value() {
        let e = CalcError::Coercion("\"foo\"".to_string());
        assert_eq!(e.to_string(), "Could not convert \"foo\" to a number");
    }

    #[tokio::test]
    async fn internal_errors_hide_their_detail() {
        let resp = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn calc_errors_map_to_bad_request() {
        let resp = AppError::from(CalcError::DivisionByZero).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
