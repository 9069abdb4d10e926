//! Speech Context - Value Objects

use base64::{engine::general_purpose::STANDARD, Engine};

use super::SpeechError;

/// 待合成文本
///
/// 不变量:
/// - 去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    /// 去除首尾空白并校验
    pub fn parse(raw: &str) -> Result<Self, SpeechError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SpeechError::EmptyText);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SpeechText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// TTS 服务凭证
///
/// 空字符串视为未配置；Debug 输出不泄露密钥
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            return None;
        }
        Some(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 音色参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// 音频 data URL: `data:<mime>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDataUrl(String);

impl AudioDataUrl {
    pub const MPEG_MIME: &'static str = "audio/mpeg";

    /// 将 MP3 字节编码为 data URL
    pub fn from_mpeg(bytes: &[u8]) -> Self {
        Self::encode(Self::MPEG_MIME, bytes)
    }

    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// 解析 data URL，返回 (mime, bytes)
    pub fn decode(&self) -> Result<(&str, Vec<u8>), SpeechError> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| SpeechError::InvalidDataUrl("missing data: scheme".to_string()))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| SpeechError::InvalidDataUrl("missing ;base64, marker".to_string()))?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| SpeechError::InvalidDataUrl(e.to_string()))?;
        Ok((mime, bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AudioDataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
