//! End-to-end behaviour of the course detail page against a stubbed backend.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, LOCATION};
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use storefront::domain::TRACE_ID_HEADER;
use storefront::test_support::stub_upstream::{
    CannedResponse, StubUpstream, unreachable_base_url,
};
use support::{
    ACCESS_PATH, COURSE_PATH, RATING_PATH, RELATED_PATH, course_json, init_app, related_json,
    sign_in_as,
};

fn rating_json() -> Value {
    json!({ "averageRating": 4.5, "totalRatings": 12 })
}

fn healthy_backend(access: bool) -> Vec<CannedResponse> {
    vec![
        CannedResponse::json(ACCESS_PATH, 200, &json!({ "access": access })),
        CannedResponse::json(COURSE_PATH, 200, &course_json()),
        CannedResponse::json(RATING_PATH, 200, &rating_json()),
        CannedResponse::json(RELATED_PATH, 200, &related_json()),
    ]
}

#[rstest]
#[actix_web::test]
async fn anonymous_visitor_sees_locked_page() {
    let upstream = StubUpstream::start(healthy_backend(true)).expect("stub starts");
    let app = init_app(upstream.base_url()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/courses/rust-basics").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["access"], json!(false));
    assert!(body["userId"].is_null());
    assert_eq!(body["relatedCourses"], json!([]));
    assert_eq!(body["lessons"][0]["locked"], json!(true));
    assert_eq!(body["lessons"][1]["label"], json!("Lesson - 2"));
    assert_eq!(body["hero"]["lessonCountLabel"], json!("২ টি ক্লাস"));
    assert_eq!(body["hero"]["rating"], rating_json());
    assert_eq!(body["course"]["badge"], json!("bestseller"));

    assert!(upstream.requests_to(ACCESS_PATH).is_empty());
    assert!(upstream.requests_to(RELATED_PATH).is_empty());
    let course_requests = upstream.requests_to(COURSE_PATH);
    assert_eq!(course_requests.len(), 1);
    assert_eq!(course_requests[0].body, json!({ "courseSlug": "rust-basics" }));
    assert_eq!(course_requests[0].cache_control.as_deref(), Some("no-store"));
    assert_eq!(upstream.requests_to(RATING_PATH)[0].query, "courseId=course-1");
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn viewer_with_access_goes_straight_to_the_first_lesson() {
    let upstream = StubUpstream::start(healthy_backend(true)).expect("stub starts");
    let app = init_app(upstream.base_url()).await;
    let cookie = sign_in_as(&app, "user-42").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/courses/rust-basics")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let expected = format!("/courses/rust-basics/{}", urlencoding::encode("শুরু"));
    assert_eq!(
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some(expected.as_str())
    );
    assert_eq!(
        upstream.requests_to(ACCESS_PATH)[0].body,
        json!({ "courseSlug": "rust-basics", "userId": "user-42" })
    );
    assert!(upstream.requests_to(RATING_PATH).is_empty());
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn viewer_without_access_sees_related_courses() {
    let upstream = StubUpstream::start(healthy_backend(false)).expect("stub starts");
    let app = init_app(upstream.base_url()).await;
    let cookie = sign_in_as(&app, "user-42").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/courses/rust-basics")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["userId"], json!("user-42"));
    assert_eq!(body["sidebar"]["authenticated"], json!(true));
    let card = &body["relatedCourses"][0];
    assert_eq!(card["link"], json!("/courses/async-rust/futures"));
    assert_eq!(card["categoryLink"], json!("/courses/category?categoryId=cat-7"));
    assert_eq!(card["purchased"], json!(true));
    assert_eq!(card["progressComplete"], json!(false));

    let related = upstream.requests_to(RELATED_PATH);
    assert_eq!(related.len(), 1);
    assert_eq!(
        related[0].body,
        json!({ "userId": "user-42", "categoryId": "cat-7", "currentCourseId": "course-1" })
    );
    assert_eq!(
        upstream.requests_to(COURSE_PATH)[0].body,
        json!({ "courseSlug": "rust-basics", "userId": "user-42" })
    );
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn missing_course_is_a_generic_404_with_trace_id() {
    let upstream = StubUpstream::start(vec![CannedResponse::json(
        COURSE_PATH,
        404,
        &json!({ "error": "no course with slug rust-basics in tenant 3" }),
    )])
    .expect("stub starts");
    let app = init_app(upstream.base_url()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/courses/rust-basics").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Invalid request"));
    assert_eq!(body["traceId"], json!(header));
    assert_eq!(body["details"], json!({ "stage": "course", "kind": "not_found" }));
    assert!(upstream.requests_to(RATING_PATH).is_empty());
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn failing_related_courses_hide_the_page() {
    let upstream = StubUpstream::start(vec![
        CannedResponse::json(ACCESS_PATH, 200, &json!({ "access": false })),
        CannedResponse::json(COURSE_PATH, 200, &course_json()),
        CannedResponse::json(RELATED_PATH, 500, &json!({ "error": "boom" })),
    ])
    .expect("stub starts");
    let app = init_app(upstream.base_url()).await;
    let cookie = sign_in_as(&app, "user-42").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/courses/rust-basics")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["stage"], json!("related_courses"));
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn rating_outage_still_renders_the_page() {
    let upstream = StubUpstream::start(vec![
        CannedResponse::json(COURSE_PATH, 200, &course_json()),
        CannedResponse::raw(RATING_PATH, 503, "upstream down"),
    ])
    .expect("stub starts");
    let app = init_app(upstream.base_url()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/courses/rust-basics").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert!(body["hero"]["rating"].is_null());
    upstream.stop().await;
}

#[rstest]
#[actix_web::test]
async fn unreachable_backend_is_a_404_not_a_500() {
    let app = init_app(unreachable_base_url().expect("free port")).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/courses/rust-basics").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Error occurred while fetching course"));
    assert_eq!(body["details"]["kind"], json!("upstream_unavailable"));
}

#[rstest]
#[actix_web::test]
async fn course_data_endpoint_is_idempotent() {
    let upstream = StubUpstream::start(healthy_backend(false)).expect("stub starts");
    let app = init_app(upstream.base_url()).await;
    let cookie = sign_in_as(&app, "user-42").await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/courses/rust-basics")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        bodies.push(test::read_body_json::<Value, _>(res).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0]["access"], json!(false));
    assert_eq!(bodies[0]["relatedCourses"][0]["slug"], json!("async-rust"));
    upstream.stop().await;
}
