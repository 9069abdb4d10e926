//! ElevenLabs TTS Client - 调用 ElevenLabs HTTP API
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Header: xi-api-key
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// 凭证请求头
const API_KEY_HEADER: &str = "xi-api-key";

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: ElevenLabsVoiceSettings,
}

#[derive(Debug, Serialize)]
struct ElevenLabsVoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// ElevenLabs 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }
}

#[async_trait]
impl TtsEnginePort for ElevenLabsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let url = self.synthesize_url(&request.voice_id);
        let body = ElevenLabsRequest {
            text: request.text.as_str(),
            model_id: &request.model_id,
            voice_settings: ElevenLabsVoiceSettings {
                stability: request.voice_settings.stability,
                similarity_boost: request.voice_settings.similarity_boost,
            },
        };

        tracing::debug!(
            url = %url,
            text_len = body.text.len(),
            model_id = %body.model_id,
            "Sending ElevenLabs synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, request.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to ElevenLabs: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(audio_size = audio_data.len(), "ElevenLabs synthesis completed");

        Ok(SynthesisResponse { audio_data })
    }
}
