//! TTS Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::SynthesizeSpeechCommand;
use crate::infrastructure::http::dto::{TtsRequest, TtsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 文本转语音，返回 data URL
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Json<TtsResponse>, ApiError> {
    let Json(req) = payload?;

    let cmd = SynthesizeSpeechCommand { text: req.text };
    let result = state.synthesize_handler.handle(cmd).await?;

    Ok(Json(TtsResponse::success(result.audio.into_inner())))
}
