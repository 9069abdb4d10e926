//! Health Query Handlers

use crate::application::queries::{GetHealth, HealthStatus};
use crate::domain::speech::ApiKey;

/// GetHealth Handler - 报告凭证是否已配置
pub struct GetHealthHandler {
    tts_configured: bool,
}

impl GetHealthHandler {
    pub fn new(api_key: Option<&ApiKey>) -> Self {
        Self {
            tts_configured: api_key.is_some(),
        }
    }

    pub fn handle(&self, _query: GetHealth) -> HealthStatus {
        HealthStatus {
            tts_configured: self.tts_configured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_configured_key() {
        let key = ApiKey::new("sk-test");
        let handler = GetHealthHandler::new(key.as_ref());
        assert!(handler.handle(GetHealth).tts_configured);
    }

    #[test]
    fn test_reports_missing_key() {
        let handler = GetHealthHandler::new(None);
        assert!(!handler.handle(GetHealth).tts_configured);
    }
}
