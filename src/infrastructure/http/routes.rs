//! HTTP Routes
//!
//! API Endpoints:
//! - /tts      POST  文本转语音，返回 data URL
//! - /health   GET   健康检查

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 文本长度不设上限，关闭 axum 默认的 2MB 请求体限制
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tts", post(handlers::synthesize))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::disable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::domain::speech::ApiKey;
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig};

    const DATA_URL_PREFIX: &str = "data:audio/mpeg;base64,";

    fn app(fake: FakeTtsClient, key: Option<&str>) -> Router {
        let state = AppState::new(Arc::new(fake), key.and_then(ApiKey::new));
        create_routes().with_state(Arc::new(state))
    }

    fn tts_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/tts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_tts_success_returns_data_url() {
        let audio = vec![0xFF, 0xF3, 0x44, 0xC4, 0x00, 0x01];
        let app = app(
            FakeTtsClient::new(FakeTtsClientConfig::with_audio(audio.clone())),
            Some("sk-test"),
        );

        let (status, body) = send(app, tts_request(r#"{"text": "Hello world"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        let expected = format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(&audio));
        assert_eq!(body["audio"], expected);

        let payload = body["audio"]
            .as_str()
            .unwrap()
            .strip_prefix(DATA_URL_PREFIX)
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), audio);
    }

    #[tokio::test]
    async fn test_tts_blank_text_returns_400() {
        for body in [r#"{"text": ""}"#, r#"{"text": "   "}"#, r#"{}"#, r#"{"text": null}"#] {
            let app = app(FakeTtsClient::new(FakeTtsClientConfig::default()), Some("sk-test"));
            let (status, json) = send(app, tts_request(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["ok"], false);
            assert_eq!(json["error"], "No text provided");
        }
    }

    #[tokio::test]
    async fn test_tts_without_key_returns_500() {
        for text in ["hello", "  padded  ", "你好"] {
            let app = app(FakeTtsClient::new(FakeTtsClientConfig::default()), None);
            let body = serde_json::json!({ "text": text }).to_string();
            let (status, json) = send(app, tts_request(body)).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json["ok"], false);
            assert_eq!(json["error"], "API key not configured");
        }
    }

    #[tokio::test]
    async fn test_tts_upstream_failure_returns_status_code() {
        let app = app(FakeTtsClient::new(FakeTtsClientConfig::failing(401)), Some("sk-test"));

        let (status, json) = send(app, tts_request(r#"{"text": "hello"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["ok"], false);
        let error = json["error"].as_str().unwrap();
        assert!(error.contains("401"));
        assert!(!error.contains("fake upstream failure"));
    }

    #[tokio::test]
    async fn test_tts_accepts_text_beyond_default_body_limit() {
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let state = AppState::new(fake.clone(), ApiKey::new("sk-test"));
        let app = create_routes().with_state(Arc::new(state));

        let text = "a".repeat(3 * 1024 * 1024);
        let body = serde_json::json!({ "text": text }).to_string();
        let (status, json) = send(app, tts_request(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
        assert_eq!(fake.call_count(), 1);
        assert_eq!(fake.last_request().unwrap().text.as_str().len(), text.len());
    }

    #[tokio::test]
    async fn test_tts_malformed_body_returns_error_envelope() {
        let app = app(FakeTtsClient::new(FakeTtsClientConfig::default()), Some("sk-test"));

        let (status, json) = send(app, tts_request("{not json")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["ok"], false);
        assert!(json["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_health_reports_key_presence() {
        for (key, expected) in [(Some("sk-test"), true), (None, false), (Some(""), false)] {
            let app = app(FakeTtsClient::new(FakeTtsClientConfig::default()), key);
            let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

            let (status, json) = send(app, request).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["status"], "ok");
            assert_eq!(json["tts_configured"], expected);
        }
    }
}
