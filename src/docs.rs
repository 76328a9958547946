use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::pdf::handler::generate_pdf,
    ),
    components(
        schemas(
            crate::modules::pdf::dto::GeneratePdfRequest,
            crate::modules::pdf::dto::GeneratePdfResponse,
            crate::common::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Pdf", description = "Transcript PDF generation")
    )
)]
pub struct ApiDoc;
