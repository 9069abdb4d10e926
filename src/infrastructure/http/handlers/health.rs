//! Health Handler
//!
//! 健康检查，报告凭证是否已配置

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetHealth;
use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// Health endpoint - 总是返回 200
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = state.get_health_handler.handle(GetHealth);

    Json(HealthResponse {
        status: "ok",
        tts_configured: status.tts_configured,
    })
}
