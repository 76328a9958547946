use axum::Router;
use axum::routing::post;

use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod renderer;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate-pdf", post(handler::generate_pdf))
}
