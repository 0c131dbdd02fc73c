//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Sneakers web application
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sneakers API",
        version = "0.1.0",
        description = "Sneaker collection catalog: browse, search and manage sneakers",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "This server")
    ),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::ErrorCode)
    ),
    nest(
        (path = "/sneakers", api = domain_sneakers::ApiDoc)
    ),
    tags(
        (name = "Sneakers", description = "Sneaker catalog endpoints")
    )
)]
pub struct ApiDoc;
