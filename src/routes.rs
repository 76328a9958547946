use crate::docs::ApiDoc;
use crate::state::AppState;
use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes(state: &AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(crate::modules::pdf::router())
        .nest_service("/static/pdfs", ServeDir::new(state.storage.dir()))
        .route("/health", axum::routing::get(|| async { "ok" }))
        .layer(cors)
}
