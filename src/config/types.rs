//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::speech::ApiKey;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 服务配置
#[derive(Clone, Deserialize)]
pub struct TtsConfig {
    /// ElevenLabs API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// ElevenLabs API Key，缺失时服务以降级模式运行
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_tts_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            api_key: None,
        }
    }
}

impl TtsConfig {
    /// 凭证（空字符串视为未配置）
    pub fn api_key(&self) -> Option<ApiKey> {
        self.api_key.clone().and_then(ApiKey::new)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

impl std::fmt::Debug for TtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key())
            .finish()
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
