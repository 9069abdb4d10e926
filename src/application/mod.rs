//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine）
//! - commands: 合成命令及处理器
//! - queries: 健康检查查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{SynthesizeSpeechHandler, DEFAULT_MODEL_ID, DEFAULT_VOICE_ID},
    SynthesizeSpeechCommand, SynthesizeSpeechResponse,
};

pub use error::ApplicationError;

pub use ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

pub use queries::{handlers::GetHealthHandler, GetHealth, HealthStatus};
