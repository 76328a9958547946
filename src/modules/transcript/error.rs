use thiserror::Error;

/// Failure modes of the caption fetch, distinguished so the handler can
/// surface user-actionable ones separately from everything else.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video")]
    SubtitlesDisabled,

    #[error("Video is unavailable or deleted")]
    VideoUnavailable,

    #[error("transcript request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}
