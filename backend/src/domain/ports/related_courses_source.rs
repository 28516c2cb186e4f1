//! Driven port for courses related to the one being viewed.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Course, UserId};

/// Parameters of a related-courses lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedCoursesRequest {
    /// Signed-in viewer the recommendations are for.
    pub user_id: UserId,
    /// Category of the course being viewed, when the catalogue has one.
    pub category_id: Option<String>,
    /// Identifier of the course being viewed.
    pub current_course_id: String,
}

define_port_error! {
    /// Failures raised while fetching related courses.
    pub enum RelatedCoursesSourceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "related courses transport failed: {message}"; kind: UpstreamUnavailable,
        /// The endpoint did not answer in time.
        Timeout { message: String } =>
            "related courses timed out: {message}"; kind: UpstreamUnavailable,
        /// The endpoint refused the viewer.
        Unauthorized { message: String } =>
            "related courses unauthorised: {message}"; kind: Unauthorized,
        /// Any other non-success status.
        Rejected { status: u16, message: String } =>
            "related courses rejected with status {status}: {message}"; kind: Unknown,
        /// The body was not a list of courses.
        Decode { message: String } =>
            "related courses decode failed: {message}"; kind: Unknown,
    }
}

/// Port listing sibling courses for a viewer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelatedCoursesSource: Send + Sync {
    /// List courses related to `request.current_course_id`.
    async fn related_courses(
        &self,
        request: &RelatedCoursesRequest,
    ) -> Result<Vec<Course>, RelatedCoursesSourceError>;
}

/// Fixture with no related courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRelatedCoursesSource;

#[async_trait]
impl RelatedCoursesSource for FixtureRelatedCoursesSource {
    async fn related_courses(
        &self,
        _request: &RelatedCoursesRequest,
    ) -> Result<Vec<Course>, RelatedCoursesSourceError> {
        Ok(Vec::new())
    }
}
