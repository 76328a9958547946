use axum::http::StatusCode;
use thiserror::Error;

use crate::modules::transcript::error::TranscriptError;

/// Everything that can go wrong after a non-empty link was submitted.
/// Display strings are the exact user-facing messages.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid YouTube link")]
    InvalidLink,

    #[error("Subtitles are disabled for this video")]
    SubtitlesDisabled,

    #[error("Video is unavailable or deleted")]
    VideoUnavailable,

    #[error("An error occurred: {0}")]
    Internal(String),
}

impl GenerateError {
    pub fn status(&self) -> StatusCode {
        match self {
            GenerateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<TranscriptError> for GenerateError {
    fn from(err: TranscriptError) -> Self {
        match err {
            TranscriptError::SubtitlesDisabled => GenerateError::SubtitlesDisabled,
            TranscriptError::VideoUnavailable => GenerateError::VideoUnavailable,
            TranscriptError::Network(e) => GenerateError::Internal(e.to_string()),
            TranscriptError::Other(msg) => GenerateError::Internal(msg),
        }
    }
}
