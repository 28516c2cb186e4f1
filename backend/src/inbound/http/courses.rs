//! Course detail endpoints.
//!
//! ```text
//! GET /courses/{slug}
//! GET /api/v1/courses/{slug}
//! ```
//!
//! Both responses depend on who is viewing, so every outcome is sent with
//! `Cache-Control: no-store`.

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::ports::INVALID_REQUEST_MESSAGE;
use crate::domain::{CourseDataOutcome, CoursePageOutcome, CourseSlug, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store;
use crate::inbound::http::schemas::{CourseDataSchema, CoursePageSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn parse_slug(raw: String) -> Result<CourseSlug, Error> {
    CourseSlug::new(raw).map_err(|error| {
        debug!(%error, "rejected course slug");
        Error::not_found(INVALID_REQUEST_MESSAGE)
    })
}

/// Course detail page for the current viewer.
///
/// Viewers who already have access are sent straight to the first lesson.
#[utoipa::path(
    get,
    path = "/courses/{slug}",
    params(("slug" = String, Path, description = "Course slug; localised slugs are percent-encoded")),
    responses(
        (status = 200, description = "Course page", body = CoursePageSchema),
        (
            status = 303,
            description = "Viewer has access; continue at the first lesson",
            headers(("Location" = String, description = "Percent-encoded lesson path"))
        ),
        (status = 404, description = "Course unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "coursePage"
)]
#[get("/courses/{slug}")]
pub async fn course_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(path.into_inner())?;
    match state.course_pages.course_page(&slug, session.viewer()).await {
        CoursePageOutcome::Redirect(location) => Ok(HttpResponse::SeeOther()
            .insert_header((LOCATION, location.encoded_path()))
            .insert_header(no_store())
            .finish()),
        CoursePageOutcome::Page(page) => Ok(HttpResponse::Ok().insert_header(no_store()).json(page)),
        CoursePageOutcome::NotFound(failure) => Err(Error::from(failure)),
    }
}

/// Aggregated course data, as consumed by the page renderer.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{slug}",
    params(("slug" = String, Path, description = "Course slug")),
    responses(
        (status = 200, description = "Aggregated course data", body = CourseDataSchema),
        (status = 404, description = "Course unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "courseData"
)]
#[get("/courses/{slug}")]
pub async fn course_data(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(path.into_inner())?;
    match state.course_pages.course_data(&slug, session.viewer()).await {
        CourseDataOutcome::Found(data) => Ok(HttpResponse::Ok().insert_header(no_store()).json(data)),
        CourseDataOutcome::NotFound(failure) => Err(Error::from(failure)),
    }
}

#[cfg(test)]
#[path = "courses_tests.rs"]
mod tests;
