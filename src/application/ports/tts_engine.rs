//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{ApiKey, SpeechText, VoiceSettings};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 上游返回非 200 状态码，body 仅用于日志
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 已校验的文本
    pub text: SpeechText,
    /// 调用凭证（由 handler 构造时注入）
    pub api_key: ApiKey,
    pub voice_id: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

/// TTS 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 原始音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 发送文本到外部 TTS 服务，返回合成的音频数据
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;
}
