//! Rating port over `GET /api/courses/ratings/averageRating`.

use async_trait::async_trait;
use serde_json::Value;

use super::client::{StorefrontApi, TransportFailure};
use super::dto::RatingQueryDto;
use crate::domain::RatingResult;
use crate::domain::ports::{CourseRatingSource, CourseRatingSourceError};

impl From<TransportFailure> for CourseRatingSourceError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout(message) => Self::timeout(message),
            TransportFailure::Transport(message) => Self::transport(message),
        }
    }
}

#[async_trait]
impl CourseRatingSource for StorefrontApi {
    async fn average_rating(
        &self,
        course_id: &str,
    ) -> Result<RatingResult, CourseRatingSourceError> {
        let request = self
            .get(self.endpoints.rating.clone())
            .query(&RatingQueryDto { course_id });
        let response = self.exchange(request).await?;

        if !response.status.is_success() {
            return Err(CourseRatingSourceError::rejected(
                response.status.as_u16(),
                response.failure_detail(),
            ));
        }

        let payload: Value = serde_json::from_slice(&response.body)
            .map_err(|error| CourseRatingSourceError::decode(error.to_string()))?;
        Ok(RatingResult::new(payload))
    }
}
