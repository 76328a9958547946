use async_trait::async_trait;

use super::error::TranscriptError;
use super::model::TranscriptSegment;

/// Source of caption transcripts for a video id, in original temporal order.
///
/// Object-safe so handlers can be exercised against a stub in tests; the
/// production implementation lives in `infrastructure::youtube`.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError>;
}
