//! Voxgate - 文本转语音代理
//!
//! 接收文本，转发到 ElevenLabs 合成语音，以 base64 data URL 返回音频
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 文本校验、凭证、data URL 编码
//!
//! 应用层 (application/):
//! - Ports: TtsEnginePort
//! - Commands: SynthesizeSpeech
//! - Queries: GetHealth
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: /tts, /health
//! - Adapters: ElevenLabs 客户端、Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
