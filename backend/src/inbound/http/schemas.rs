//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON shape of their domain counterparts and are
//! registered under the domain names so the generated document reads
//! naturally.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid request")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Which aggregation stage failed and why, for not-found responses.
    #[schema(example = json!({ "stage": "course", "kind": "not_found" }))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::CourseData`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CourseData, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseDataSchema {
    /// Whether the viewer may open the lessons.
    access: bool,
    /// Sibling courses; empty for anonymous viewers.
    #[schema(value_type = Vec<Object>)]
    related_courses: Vec<serde_json::Value>,
    /// Catalogue record, passed through unmodified.
    #[schema(value_type = Object)]
    course: serde_json::Value,
    /// Signed-in viewer; absent for anonymous visitors.
    #[schema(example = "user-42")]
    user_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::CourseHero`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CourseHero, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseHeroSchema {
    title: String,
    category_name: Option<String>,
    image_url: Option<String>,
    lesson_count: usize,
    /// Lesson count in Bengali digits.
    #[schema(example = "১২ টি ক্লাস")]
    lesson_count_label: String,
    /// Aggregate rating as returned by the ratings endpoint; null when it
    /// could not be fetched.
    #[schema(value_type = Option<Object>)]
    rating: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::LessonEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::LessonEntry, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LessonEntrySchema {
    /// One-based display position.
    position: usize,
    #[schema(example = "Lesson - 1")]
    label: String,
    id: String,
    slug: String,
    title: Option<String>,
    /// True unless the viewer has access.
    locked: bool,
}

/// OpenAPI schema for [`crate::domain::CourseSidebar`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CourseSidebar, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseSidebarSchema {
    authenticated: bool,
    purchased: bool,
    progress: Option<f64>,
    price: Option<f64>,
    lesson_count: usize,
}

/// OpenAPI schema for [`crate::domain::RelatedCourseCard`].
#[derive(ToSchema)]
#[schema(as = crate::domain::RelatedCourseCard, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RelatedCourseCardSchema {
    id: String,
    slug: String,
    title: String,
    image_url: Option<String>,
    category_name: Option<String>,
    #[schema(example = "/courses/category?categoryId=cat-7")]
    category_link: Option<String>,
    lesson_count: usize,
    lesson_count_label: String,
    /// First 200 characters of the description.
    excerpt: Option<String>,
    purchased: bool,
    progress: Option<f64>,
    progress_complete: bool,
    #[schema(example = "/courses/rust-basics")]
    link: String,
}

/// OpenAPI schema for [`crate::domain::CoursePage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CoursePage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CoursePageSchema {
    access: bool,
    user_id: Option<String>,
    hero: CourseHeroSchema,
    lessons: Vec<LessonEntrySchema>,
    /// First 1200 characters of the description followed by `...`.
    description: Option<String>,
    sidebar: CourseSidebarSchema,
    related_courses: Vec<RelatedCourseCardSchema>,
    #[schema(value_type = Object)]
    course: serde_json::Value,
}
