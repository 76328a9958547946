use super::dto::{GeneratePdfRequest, GeneratePdfResponse};
use super::service::PdfService;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Generate a transcript PDF for a YouTube link
#[utoipa::path(
    post,
    path = "/generate-pdf",
    request_body = GeneratePdfRequest,
    responses(
        (status = 200, description = "PDF generated", body = GeneratePdfResponse),
        (status = 400, description = "Missing or invalid link, or captions unavailable", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Pdf"
)]
pub async fn generate_pdf(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePdfRequest>,
) -> impl IntoResponse {
    let video_link = match payload.video_link.as_deref() {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => {
            return ApiError("No video link provided".to_string(), StatusCode::BAD_REQUEST)
                .into_response();
        }
    };

    match PdfService::generate(state, &video_link).await {
        Ok(res) => ApiSuccess(res, StatusCode::OK).into_response(),
        Err(e) => ApiError(e.to_string(), e.status()).into_response(),
    }
}
