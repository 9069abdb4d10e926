//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("No text provided")]
    EmptyText,

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}
