//! Catalogue port over `POST /api/front/courses/course`.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::{RawResponse, StorefrontApi, TransportFailure};
use super::dto::CourseRequestDto;
use crate::domain::Course;
use crate::domain::ports::{CourseCatalogueSource, CourseCatalogueSourceError, CourseLookup};

impl From<TransportFailure> for CourseCatalogueSourceError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Timeout(message) => Self::timeout(message),
            TransportFailure::Transport(message) => Self::transport(message),
        }
    }
}

fn map_status_error(response: &RawResponse) -> CourseCatalogueSourceError {
    let message = response.failure_detail();
    match response.status {
        StatusCode::NOT_FOUND => CourseCatalogueSourceError::not_found(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CourseCatalogueSourceError::unauthorized(message)
        }
        status => CourseCatalogueSourceError::rejected(status.as_u16(), message),
    }
}

#[async_trait]
impl CourseCatalogueSource for StorefrontApi {
    async fn fetch_course(
        &self,
        lookup: &CourseLookup,
    ) -> Result<Course, CourseCatalogueSourceError> {
        let request = self
            .post(self.endpoints.course.clone())
            .json(&CourseRequestDto {
                course_slug: lookup.slug.as_ref(),
                user_id: lookup.viewer.as_ref().map(|id| id.as_ref()),
            });
        let response = self.exchange(request).await?;

        if !response.status.is_success() {
            return Err(map_status_error(&response));
        }

        serde_json::from_slice(&response.body).map_err(|error| {
            CourseCatalogueSourceError::decode(format!("invalid course payload: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{CourseSlug, UserId};
    use crate::test_support::stub_upstream::{CannedResponse, StubUpstream};
    use rstest::rstest;
    use serde_json::json;

    const PATH: &str = "/api/front/courses/course";

    fn lookup(viewer: Option<&str>) -> CourseLookup {
        CourseLookup {
            slug: CourseSlug::new("rust-basics").expect("valid slug"),
            viewer: viewer.map(|id| UserId::new(id).expect("valid user id")),
        }
    }

    fn course_body() -> serde_json::Value {
        json!({
            "id": "course-1",
            "slug": "rust-basics",
            "title": "Rust Basics",
            "lessons": [{ "id": "l1", "slug": "intro", "videoUrl": "https://cdn.test/1" }],
            "purchases": [{ "id": "p1" }],
            "progress": 40,
            "instructor": { "name": "Ferris" }
        })
    }

    #[rstest]
    #[case::anonymous(None, json!({ "courseSlug": "rust-basics" }))]
    #[case::viewer(Some("user-42"), json!({ "courseSlug": "rust-basics", "userId": "user-42" }))]
    #[actix_web::test]
    async fn posts_slug_and_optional_viewer(
        #[case] viewer: Option<&str>,
        #[case] expected_body: serde_json::Value,
    ) {
        let upstream =
            StubUpstream::start(vec![CannedResponse::json(PATH, 200, &course_body())]).expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let course = api.fetch_course(&lookup(viewer)).await.expect("course");

        assert_eq!(course.id, "course-1");
        assert!(course.is_purchased());
        let requests = upstream.requests_to(PATH);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body, expected_body);
        assert_eq!(requests[0].cache_control.as_deref(), Some("no-store"));
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn unknown_fields_survive_the_round_trip() {
        let upstream =
            StubUpstream::start(vec![CannedResponse::json(PATH, 200, &course_body())]).expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let course = api.fetch_course(&lookup(None)).await.expect("course");

        let value = serde_json::to_value(&course).expect("serialise");
        assert_eq!(value["instructor"], json!({ "name": "Ferris" }));
        assert_eq!(value["lessons"][0]["videoUrl"], json!("https://cdn.test/1"));
        upstream.stop().await;
    }

    #[rstest]
    #[case::missing(404, "NotFound")]
    #[case::unauthorised(401, "Unauthorized")]
    #[case::forbidden(403, "Unauthorized")]
    #[case::bad_request(400, "Rejected")]
    #[case::server_error(500, "Rejected")]
    #[actix_web::test]
    async fn non_success_statuses_map_to_errors(#[case] status: u16, #[case] expected: &str) {
        let upstream = StubUpstream::start(vec![CannedResponse::json(
            PATH,
            status,
            &json!({ "error": "Course not published" }),
        )])
        .expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let error = api.fetch_course(&lookup(None)).await.expect_err("fails");

        let matched = match expected {
            "NotFound" => matches!(error, CourseCatalogueSourceError::NotFound { .. }),
            "Unauthorized" => matches!(error, CourseCatalogueSourceError::Unauthorized { .. }),
            "Rejected" => matches!(error, CourseCatalogueSourceError::Rejected { .. }),
            _ => panic!("unsupported test expectation: {expected}"),
        };
        assert!(matched, "status {status} should map to {expected}, got {error:?}");
        assert!(error.to_string().contains("Course not published"));
        upstream.stop().await;
    }

    #[rstest]
    #[case::number(json!(1200), Some(1200.0))]
    #[case::decimal_string(json!("1200.00"), Some(1200.0))]
    #[case::absent(serde_json::Value::Null, None)]
    #[actix_web::test]
    async fn price_decodes_from_number_or_string(
        #[case] price: serde_json::Value,
        #[case] expected: Option<f64>,
    ) {
        let mut body = course_body();
        body["price"] = price;
        let upstream =
            StubUpstream::start(vec![CannedResponse::json(PATH, 200, &body)]).expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let course = api.fetch_course(&lookup(None)).await.expect("course");

        assert_eq!(course.price_amount(), expected);
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn numeric_ids_decode_as_strings() {
        let body = json!({
            "id": 17,
            "slug": "rust-basics",
            "title": "Rust Basics",
            "categoryId": 7,
            "lessons": [{ "id": 301, "slug": "intro" }]
        });
        let upstream =
            StubUpstream::start(vec![CannedResponse::json(PATH, 200, &body)]).expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let course = api.fetch_course(&lookup(None)).await.expect("course");

        assert_eq!(course.id, "17");
        assert_eq!(course.category_id(), Some("7"));
        assert_eq!(course.lessons[0].id, "301");
        upstream.stop().await;
    }

    #[actix_web::test]
    async fn malformed_course_is_a_decode_error() {
        let upstream = StubUpstream::start(vec![CannedResponse::json(
            PATH,
            200,
            &json!({ "id": "course-1" }),
        )])
        .expect("stub");
        let api = StorefrontApi::new(upstream.base_url(), Duration::from_secs(5)).expect("client");

        let error = api.fetch_course(&lookup(None)).await.expect_err("fails");

        assert!(matches!(error, CourseCatalogueSourceError::Decode { .. }));
        upstream.stop().await;
    }
}
