use utoipa::OpenApi;

/// Top-level OpenAPI document for the campus API.
///
/// Domain APIs document their own paths; they are nested here under the
/// prefixes they are mounted at.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CampusBridge API",
        description = "Platform API connecting students, startups, and clubs"
    ),
    nest(
        (path = "/api/events", api = domain_events::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
