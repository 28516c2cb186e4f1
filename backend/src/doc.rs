//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the course detail endpoints, the health probes and
//! the schema wrappers from [`crate::inbound::http::schemas`], which keep
//! domain types free of utoipa derives.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    CourseDataSchema, CourseHeroSchema, CoursePageSchema, CourseSidebarSchema, ErrorCodeSchema,
    ErrorSchema, LessonEntrySchema, RelatedCourseCardSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Private session cookie issued by the login flow. Optional: without it the \
                 viewer is anonymous.",
            ))),
        );
    }
}

/// OpenAPI document for the storefront HTTP surface.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Storefront course detail API",
        description = "Course detail pages and the aggregated course data behind them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security((), ("SessionCookie" = [])),
    paths(
        crate::inbound::http::courses::course_page,
        crate::inbound::http::courses::course_data,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CourseDataSchema,
        CoursePageSchema,
        CourseHeroSchema,
        LessonEntrySchema,
        CourseSidebarSchema,
        RelatedCourseCardSchema,
    )),
    tags(
        (name = "courses", description = "Course detail pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
