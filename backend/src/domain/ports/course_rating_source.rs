//! Driven port for aggregate course ratings.

use async_trait::async_trait;
use serde_json::json;

use super::define_port_error;
use crate::domain::RatingResult;

define_port_error! {
    /// Failures raised while fetching a rating.
    pub enum CourseRatingSourceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "rating transport failed: {message}"; kind: UpstreamUnavailable,
        /// The rating endpoint did not answer in time.
        Timeout { message: String } =>
            "rating fetch timed out: {message}"; kind: UpstreamUnavailable,
        /// Non-success status from the rating endpoint.
        Rejected { status: u16, message: String } =>
            "rating fetch rejected with status {status}: {message}"; kind: Unknown,
        /// The body was not JSON.
        Decode { message: String } =>
            "rating response decode failed: {message}"; kind: Unknown,
    }
}

/// Port fetching rating statistics for one course.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRatingSource: Send + Sync {
    /// Fetch the average rating of the course with internal id `course_id`.
    async fn average_rating(&self, course_id: &str)
    -> Result<RatingResult, CourseRatingSourceError>;
}

/// Fixture returning an unrated summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCourseRatingSource;

#[async_trait]
impl CourseRatingSource for FixtureCourseRatingSource {
    async fn average_rating(
        &self,
        _course_id: &str,
    ) -> Result<RatingResult, CourseRatingSourceError> {
        Ok(RatingResult::new(json!({ "averageRating": 0, "totalRatings": 0 })))
    }
}
