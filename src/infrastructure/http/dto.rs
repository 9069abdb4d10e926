//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 失败响应: `{"ok": false, "error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

// ============================================================================
// TTS DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// 成功响应: `{"ok": true, "audio": "data:audio/mpeg;base64,..."}`
#[derive(Debug, Serialize)]
pub struct TtsResponse {
    pub ok: bool,
    pub audio: String,
}

impl TtsResponse {
    pub fn success(audio: impl Into<String>) -> Self {
        Self {
            ok: true,
            audio: audio.into(),
        }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub tts_configured: bool,
}
