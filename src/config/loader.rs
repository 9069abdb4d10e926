//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// ElevenLabs 官方约定的凭证环境变量
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

/// 加载应用配置
///
/// 按优先级合并（`.env` 需先由 [`load_dotenv`] 载入进程环境）：
/// 1. 环境变量（前缀 `VOXGATE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// 若以上来源都未提供 `tts.api_key`，回退到 `ELEVENLABS_API_KEY`。
///
/// # 环境变量示例
/// - `VOXGATE_SERVER__HOST=0.0.0.0`
/// - `VOXGATE_SERVER__PORT=9000`
/// - `VOXGATE_TTS__API_KEY=sk_...`
/// - `ELEVENLABS_API_KEY=sk_...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 读取工作目录下的 `.env`（若存在），返回其路径
///
/// 在日志初始化之前调用，由调用方在日志就绪后记录结果
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(config_path, None)
}

/// 环境变量层
///
/// 不开启 try_parsing：值一律保留为字符串，数值字段在反序列化时再转换，
/// 保证 `tts.api_key` 这类不透明字符串原样传递
fn env_source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("VOXGATE")
        .prefix_separator("_")
        .separator("__")
        .source(vars)
}

/// `env_vars` 为 None 时读取进程环境变量
fn load_config_with_env(
    config_path: Option<&Path>,
    env_vars: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8000)?
        .set_default("tts.base_url", "https://api.elevenlabs.io")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: VOXGATE_TTS__BASE_URL=http://localhost:9999
    builder = builder.add_source(env_source(env_vars));

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    apply_api_key_fallback(&mut app_config, |name| std::env::var(name).ok());

    validate_config(&app_config)?;

    Ok(app_config)
}

/// `tts.api_key` 未配置时从 `ELEVENLABS_API_KEY` 读取
fn apply_api_key_fallback(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if config.tts.is_configured() {
        return;
    }
    if let Some(key) = lookup(API_KEY_ENV) {
        config.tts.api_key = Some(key);
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!("API Key configured: {}", config.tts.is_configured());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");

    if !config.tts.is_configured() {
        tracing::warn!(
            "{} not set, /tts will answer 500 until the key is configured",
            API_KEY_ENV
        );
    }
}
