use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GeneratePdfRequest {
    #[serde(default)]
    pub video_link: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratePdfResponse {
    pub message: String,
    pub path: String,
}
