//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不实际调用 TTS 服务：返回固定音频或固定的上游状态码，并记录收到的请求

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 设置后模拟上游返回该状态码
    pub fail_with_status: Option<u16>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: b"ID3fake-mpeg-frame".to_vec(),
            fail_with_status: None,
        }
    }
}

impl FakeTtsClientConfig {
    pub fn with_audio(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data,
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Default::default()
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求数
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// 最近一次收到的请求
    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.as_str().len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: returning fixed result"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        if let Some(status) = self.config.fail_with_status {
            return Err(TtsError::UpstreamStatus {
                status,
                body: "fake upstream failure".to_string(),
            });
        }

        Ok(SynthesisResponse {
            audio_data: self.config.audio_data.clone(),
        })
    }
}
