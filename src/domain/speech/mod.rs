//! Speech Context - 语音合成限界上下文
//!
//! 职责:
//! - 输入文本校验
//! - 凭证值对象
//! - 音频 data URL 编码

mod errors;
mod value_objects;

pub use errors::SpeechError;
pub use value_objects::{ApiKey, AudioDataUrl, SpeechText, VoiceSettings};
