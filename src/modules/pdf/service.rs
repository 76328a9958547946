use tracing::info;
use uuid::Uuid;

use super::dto::GeneratePdfResponse;
use super::error::GenerateError;
use super::renderer;
use crate::modules::transcript::video_id::extract_video_id;
use crate::state::AppState;

pub struct PdfService;

impl PdfService {
    /// Full pipeline for one request: parse the id, fetch the transcript,
    /// render the pages, persist under a per-request unique filename.
    pub async fn generate(
        state: AppState,
        video_link: &str,
    ) -> Result<GeneratePdfResponse, GenerateError> {
        let video_id = extract_video_id(video_link).ok_or(GenerateError::InvalidLink)?;

        let segments = state.fetcher.fetch(&video_id).await?;
        info!(%video_id, segments = segments.len(), "rendering transcript PDF");

        let bytes =
            renderer::render(&segments).map_err(|e| GenerateError::Internal(e.to_string()))?;

        let filename = format!("{}_{}.pdf", video_id, Self::random_suffix());
        state
            .storage
            .store(&filename, &bytes)
            .await
            .map_err(|e| GenerateError::Internal(e.to_string()))?;

        Ok(GeneratePdfResponse {
            message: "PDF generated successfully".to_string(),
            path: format!(
                "{}/static/pdfs/{}",
                state.config.public_base_url.trim_end_matches('/'),
                filename
            ),
        })
    }

    fn random_suffix() -> String {
        Uuid::new_v4().as_simple().to_string()[..6].to_string()
    }
}
