//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// API 错误
///
/// 状态码直接反映错误类别，响应体为 `{"ok": false, "error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ApplicationError::NotConfigured
            | ApplicationError::UpstreamError { .. }
            | ApplicationError::InternalError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// 请求体无法解析为 JSON 对象
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Internal(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_status_mapping() {
        let cases = [
            (ApplicationError::invalid_input("No text provided"), StatusCode::BAD_REQUEST),
            (ApplicationError::NotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (
                ApplicationError::UpstreamError { status: 503 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApplicationError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_not_configured_message() {
        match ApiError::from(ApplicationError::NotConfigured) {
            ApiError::Internal(msg) => assert_eq!(msg, "API key not configured"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
