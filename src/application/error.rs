//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::TtsError;
use crate::domain::speech::SpeechError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入无效
    #[error("{0}")]
    InvalidInput(String),

    /// 未配置凭证
    #[error("API key not configured")]
    NotConfigured,

    /// 上游返回非 200
    #[error("ElevenLabs API error: {status}")]
    UpstreamError { status: u16 },

    /// 内部错误
    #[error("{0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建输入无效错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::EmptyText => Self::InvalidInput(err.to_string()),
            SpeechError::InvalidDataUrl(_) => Self::InternalError(err.to_string()),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::UpstreamStatus { status, .. } => Self::UpstreamError { status },
            other => Self::InternalError(other.to_string()),
        }
    }
}
