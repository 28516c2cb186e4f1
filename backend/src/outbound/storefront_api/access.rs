//! Access-check port over `POST /api/courses/access`.

use async_trait::async_trait;
use tracing::debug;

use super::client::{StorefrontApi, TransportFailure};
use super::dto::{AccessRequestDto, AccessResponseDto};
use crate::domain::ports::{CourseAccessSource, CourseAccessSourceError};
use crate::domain::{ACCESS_DENIED_MESSAGE, AccessResult, CourseSlug, UserId};

impl From<TransportFailure> for CourseAccessSourceError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout(message) => Self::timeout(message),
            TransportFailure::Transport(message) => Self::transport(message),
        }
    }
}

#[async_trait]
impl CourseAccessSource for StorefrontApi {
    async fn check_access(
        &self,
        course_slug: &CourseSlug,
        user_id: &UserId,
    ) -> Result<AccessResult, CourseAccessSourceError> {
        let request = self
            .post(self.endpoints.access.clone())
            .json(&AccessRequestDto {
                course_slug: course_slug.as_ref(),
                user_id: user_id.as_ref(),
            });
        let response = self.exchange(request).await?;

        if !response.status.is_success() {
            let message = response
                .error_message()
                .unwrap_or_else(|| ACCESS_DENIED_MESSAGE.to_owned());
            debug!(
                course_slug = %course_slug,
                status = response.status.as_u16(),
                %message,
                "course access denied"
            );
            return Ok(AccessResult::denied(message));
        }

        let decoded: AccessResponseDto = serde_json::from_slice(&response.body)
            .map_err(|error| CourseAccessSourceError::decode(error.to_string()))?;
        Ok(AccessResult::from_flag(decoded.access))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_support::stub_upstream::{CannedResponse, StubUpstream, unreachable_base_url};
    use rstest::rstest;
    use serde_json::json;

    const PATH: &str = "/api/courses/access";

    fn slug() -> CourseSlug {
        CourseSlug::new("rust-basics").expect("valid slug")
    }

    fn viewer() -> UserId {
        UserId::new("user-42").expect("valid user id")
    }

    async fn check_against(canned: CannedResponse) -> (AccessResult, StubUpstream) {
        let upstream = StubUpstream::start(vec![canned]).expect("stub starts");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5))
            .expect("client builds");
        let result = api
            .check_access(&slug(), &viewer())
            .await
            .expect("access decided");
        (result, upstream)
    }

    #[rstest]
    #[case::granted(true)]
    #[case::not_granted(false)]
    #[actix_web::test]
    async fn success_body_sets_flag(#[case] access: bool) {
        let (result, upstream) =
            check_against(CannedResponse::json(PATH, 200, &json!({ "access": access }))).await;

        assert_eq!(result, AccessResult::from_flag(access));
        let requests = upstream.requests_to(PATH);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].cache_control.as_deref(), Some("no-store"));
        assert_eq!(
            requests[0].body,
            json!({ "courseSlug": "rust-basics", "userId": "user-42" })
        );
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn denial_returns_backend_message_exactly() {
        let (result, upstream) = check_against(CannedResponse::json(
            PATH,
            403,
            &json!({ "error": "Purchase required" }),
        ))
        .await;

        assert_eq!(result, AccessResult::denied("Purchase required"));
        upstream.stop().await;
    }

    #[rstest]
    #[case::empty(json!({ "error": "" }))]
    #[case::null(json!({ "error": null }))]
    #[case::absent(json!({ "code": "forbidden" }))]
    #[actix_web::test]
    async fn blank_denial_message_uses_default(#[case] body: serde_json::Value) {
        let (result, upstream) = check_against(CannedResponse::json(PATH, 403, &body)).await;

        assert_eq!(result, AccessResult::denied(ACCESS_DENIED_MESSAGE));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn unparseable_denial_uses_default_message() {
        let (result, upstream) =
            check_against(CannedResponse::raw(PATH, 500, "<html>oops</html>")).await;

        assert_eq!(result, AccessResult::denied(ACCESS_DENIED_MESSAGE));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn malformed_success_body_is_a_decode_error() {
        let upstream =
            StubUpstream::start(vec![CannedResponse::raw(PATH, 200, "yes")]).expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let error = api
            .check_access(&slug(), &viewer())
            .await
            .expect_err("decode fails");

        assert!(matches!(error, CourseAccessSourceError::Decode { .. }));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn slow_backend_times_out() {
        let upstream = StubUpstream::start(vec![
            CannedResponse::json(PATH, 200, &json!({ "access": true }))
                .delayed(Duration::from_secs(2)),
        ])
        .expect("stub");
        let api =
            StorefrontApi::new(upstream.base_url(), Duration::from_millis(200)).expect("client");

        let error = api
            .check_access(&slug(), &viewer())
            .await
            .expect_err("times out");

        assert!(matches!(error, CourseAccessSourceError::Timeout { .. }));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn unreachable_backend_is_a_transport_error() {
        let base = unreachable_base_url().expect("free port");
        let api = StorefrontApi::new(base, Duration::from_secs(5)).expect("client");

        let error = api
            .check_access(&slug(), &viewer())
            .await
            .expect_err("connection refused");

        assert!(matches!(error, CourseAccessSourceError::Transport { .. }));
    }
}
