//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{GetHealthHandler, SynthesizeSpeechHandler, TtsEnginePort};
use crate::domain::speech::ApiKey;

/// 应用状态
///
/// 凭证在构造时注入，请求之间不共享可变状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub synthesize_handler: SynthesizeSpeechHandler,

    // ========== Query Handlers ==========
    pub get_health_handler: GetHealthHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, api_key: Option<ApiKey>) -> Self {
        Self {
            get_health_handler: GetHealthHandler::new(api_key.as_ref()),
            synthesize_handler: SynthesizeSpeechHandler::new(tts_engine, api_key),
        }
    }
}
