use serde::{Deserialize, Serialize};

/// One timed unit of caption text, as returned by the caption service.
/// Only `text` is consumed by the renderer; `start` and `duration` are
/// kept so the record mirrors the upstream shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}
