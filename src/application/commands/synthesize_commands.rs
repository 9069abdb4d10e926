//! Synthesize Commands - 语音合成命令

use crate::domain::speech::AudioDataUrl;

/// 合成语音命令
///
/// `text` 为 None 表示请求体缺少该字段
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechCommand {
    pub text: Option<String>,
}

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechResponse {
    pub audio: AudioDataUrl,
}
