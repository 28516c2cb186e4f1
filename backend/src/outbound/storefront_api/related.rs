//! Related-courses port over `POST /api/front/courses/related`.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::{StorefrontApi, TransportFailure};
use super::dto::RelatedRequestDto;
use crate::domain::Course;
use crate::domain::ports::{
    RelatedCoursesRequest, RelatedCoursesSource, RelatedCoursesSourceError,
};

impl From<TransportFailure> for RelatedCoursesSourceError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout(message) => Self::timeout(message),
            TransportFailure::Transport(message) => Self::transport(message),
        }
    }
}

#[async_trait]
impl RelatedCoursesSource for StorefrontApi {
    async fn related_courses(
        &self,
        request: &RelatedCoursesRequest,
    ) -> Result<Vec<Course>, RelatedCoursesSourceError> {
        let body = RelatedRequestDto {
            user_id: request.user_id.as_ref(),
            category_id: request.category_id.as_deref(),
            current_course_id: &request.current_course_id,
        };
        let response = self
            .exchange(self.post(self.endpoints.related.clone()).json(&body))
            .await?;

        match response.status {
            status if status.is_success() => serde_json::from_slice(&response.body).map_err(
                |error| RelatedCoursesSourceError::decode(format!("invalid course list: {error}")),
            ),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                RelatedCoursesSourceError::unauthorized(response.failure_detail()),
            ),
            status => Err(RelatedCoursesSourceError::rejected(
                status.as_u16(),
                response.failure_detail(),
            )),
        }
    }
}
