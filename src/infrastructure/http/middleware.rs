//! HTTP Middleware
//!
//! 按状态码记录失败请求

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 4xx 记 warn，5xx 记 error
///
/// 错误详情在 ApiError::into_response() 中记录，这里只记录请求行、状态码和耗时
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, elapsed_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "Request rejected");
    }

    response
}
