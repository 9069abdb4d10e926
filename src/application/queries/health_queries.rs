//! Health Queries - 健康检查查询

/// 健康检查查询
#[derive(Debug, Clone, Default)]
pub struct GetHealth;

/// 健康状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub tts_configured: bool,
}
