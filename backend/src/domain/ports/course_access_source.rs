//! Driven port for the course access-authorisation endpoint.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{ACCESS_DENIED_MESSAGE, AccessResult, CourseSlug, UserId};

define_port_error! {
    /// Failures that prevented an access decision from being obtained.
    ///
    /// Denials are not errors; they come back as `Ok` results with
    /// `access == false`.
    pub enum CourseAccessSourceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "access check transport failed: {message}"; kind: UpstreamUnavailable,
        /// The endpoint did not answer in time.
        Timeout { message: String } =>
            "access check timed out: {message}"; kind: UpstreamUnavailable,
        /// The success body could not be decoded.
        Decode { message: String } =>
            "access check response decode failed: {message}"; kind: Unknown,
    }
}

/// Port asking whether a viewer may consume a course.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseAccessSource: Send + Sync {
    /// Ask for the access decision of `user_id` on `course_slug`.
    ///
    /// Implementations must not serve this from a cache: entitlements change
    /// the moment a purchase completes.
    async fn check_access(
        &self,
        course_slug: &CourseSlug,
        user_id: &UserId,
    ) -> Result<AccessResult, CourseAccessSourceError>;
}

/// Fixture that denies every viewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCourseAccessSource;

#[async_trait]
impl CourseAccessSource for FixtureCourseAccessSource {
    async fn check_access(
        &self,
        _course_slug: &CourseSlug,
        _user_id: &UserId,
    ) -> Result<AccessResult, CourseAccessSourceError> {
        Ok(AccessResult::denied(ACCESS_DENIED_MESSAGE))
    }
}
