//! Synthesize Command Handlers

use std::sync::Arc;

use crate::application::commands::{SynthesizeSpeechCommand, SynthesizeSpeechResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesisRequest, TtsEnginePort, TtsError};
use crate::domain::speech::{ApiKey, AudioDataUrl, SpeechText, VoiceSettings};

/// 默认音色 (Rachel)
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// 免费档可用的模型
pub const DEFAULT_MODEL_ID: &str = "eleven_turbo_v2_5";

/// SynthesizeSpeech Handler - 文本转语音
///
/// 凭证在构造时注入，缺失时进入降级模式：所有合成请求返回 NotConfigured
pub struct SynthesizeSpeechHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    api_key: Option<ApiKey>,
}

impl SynthesizeSpeechHandler {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, api_key: Option<ApiKey>) -> Self {
        Self {
            tts_engine,
            api_key,
        }
    }

    pub async fn handle(
        &self,
        cmd: SynthesizeSpeechCommand,
    ) -> Result<SynthesizeSpeechResponse, ApplicationError> {
        let text = SpeechText::parse(cmd.text.as_deref().unwrap_or_default())?;

        let api_key = self.api_key.clone().ok_or(ApplicationError::NotConfigured)?;

        let request = SynthesisRequest {
            text,
            api_key,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        };

        tracing::debug!(
            text_len = request.text.as_str().len(),
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            "Submitting synthesis request"
        );

        let response = self.tts_engine.synthesize(request).await.map_err(|e| {
            match &e {
                TtsError::UpstreamStatus { status, body } => {
                    tracing::error!(status = *status, body = %body, "ElevenLabs API error");
                }
                other => {
                    tracing::error!(error = %other, "TTS error");
                }
            }
            ApplicationError::from(e)
        })?;

        tracing::info!(audio_size = response.audio_data.len(), "Speech synthesized");

        Ok(SynthesizeSpeechResponse {
            audio: AudioDataUrl::from_mpeg(&response.audio_data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig};

    fn handler_with(fake: Arc<FakeTtsClient>, key: Option<&str>) -> SynthesizeSpeechHandler {
        SynthesizeSpeechHandler::new(fake, key.and_then(ApiKey::new))
    }

    fn cmd(text: Option<&str>) -> SynthesizeSpeechCommand {
        SynthesizeSpeechCommand {
            text: text.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_invalid_input() {
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let handler = handler_with(fake.clone(), Some("sk-test"));

        for text in [None, Some(""), Some("   \n\t")] {
            let err = handler.handle(cmd(text)).await.unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidInput(_)));
        }
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_checked_before_credential() {
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let handler = handler_with(fake, None);

        let err = handler.handle(cmd(Some(" "))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_key_is_not_configured() {
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let handler = handler_with(fake.clone(), None);

        let err = handler.handle(cmd(Some("hello"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotConfigured));
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_encodes_audio_as_data_url() {
        let audio = vec![0xFF, 0xFB, 0x90, 0x00, 0x42];
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::with_audio(audio.clone())));
        let handler = handler_with(fake.clone(), Some("sk-test"));

        let response = handler.handle(cmd(Some("  hi there  "))).await.unwrap();
        let (mime, decoded) = response.audio.decode().unwrap();
        assert_eq!(mime, "audio/mpeg");
        assert_eq!(decoded, audio);

        let sent = fake.last_request().unwrap();
        assert_eq!(sent.text.as_str(), "hi there");
        assert_eq!(sent.api_key.expose(), "sk-test");
        assert_eq!(sent.voice_id, DEFAULT_VOICE_ID);
        assert_eq!(sent.model_id, DEFAULT_MODEL_ID);
        assert_eq!(sent.voice_settings, VoiceSettings::default());
    }

    #[tokio::test]
    async fn test_upstream_status_is_reported() {
        let fake = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::failing(429)));
        let handler = handler_with(fake, Some("sk-test"));

        let err = handler.handle(cmd(Some("hello"))).await.unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamError { status: 429 }));
        assert!(err.to_string().contains("429"));
    }
}
