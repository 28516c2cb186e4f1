//! Driving port for the course detail page.
//!
//! Inbound adapters use this port to obtain either the aggregated course data
//! or the fully assembled page without knowing which backends are consulted.

use async_trait::async_trait;

use crate::domain::{
    CourseDataErrorKind, CourseDataFailure, CourseDataOutcome, CourseDataStage, CoursePageOutcome,
    CourseSlug, UserId,
};

use super::INVALID_REQUEST_MESSAGE;

/// Driving port for course detail reads.
///
/// Neither operation returns an error: every failure is folded into the
/// not-found outcome.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() {
/// use storefront::domain::{CourseSlug, ports::{CoursePageQuery, FixtureCoursePageQuery}};
///
/// let slug = CourseSlug::new("rust-basics").expect("valid slug");
/// let outcome = FixtureCoursePageQuery.course_data(&slug, None).await;
/// assert!(outcome.failure().is_some());
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursePageQuery: Send + Sync {
    /// Aggregate access, course record and related courses for `slug`.
    async fn course_data(&self, slug: &CourseSlug, viewer: Option<UserId>) -> CourseDataOutcome;

    /// Decide between redirecting into playback and rendering the page.
    async fn course_page(&self, slug: &CourseSlug, viewer: Option<UserId>) -> CoursePageOutcome;
}

/// Fixture query that knows no courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCoursePageQuery;

fn fixture_failure() -> CourseDataFailure {
    CourseDataFailure {
        stage: CourseDataStage::Course,
        kind: CourseDataErrorKind::NotFound,
        message: INVALID_REQUEST_MESSAGE.to_owned(),
    }
}

#[async_trait]
impl CoursePageQuery for FixtureCoursePageQuery {
    async fn course_data(&self, _slug: &CourseSlug, _viewer: Option<UserId>) -> CourseDataOutcome {
        CourseDataOutcome::NotFound(fixture_failure())
    }

    async fn course_page(&self, _slug: &CourseSlug, _viewer: Option<UserId>) -> CoursePageOutcome {
        CoursePageOutcome::NotFound(fixture_failure())
    }
}
