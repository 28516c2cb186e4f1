//! Shared harness for end-to-end course page tests.
//!
//! Builds the real application stack (trace middleware, session cookie,
//! course detail service, backend adapter) against an in-process upstream
//! stub.

use std::sync::Arc;
use std::time::Duration;

use actix_http::Request;
use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use serde_json::{Value, json};
use url::Url;

use storefront::Trace;
use storefront::domain::CourseDataService;
use storefront::inbound::http::courses::{course_data, course_page};
use storefront::inbound::http::session::USER_ID_KEY;
use storefront::inbound::http::state::HttpState;
use storefront::outbound::storefront_api::StorefrontApi;

pub const ACCESS_PATH: &str = "/api/courses/access";
pub const COURSE_PATH: &str = "/api/front/courses/course";
pub const RATING_PATH: &str = "/api/courses/ratings/averageRating";
pub const RELATED_PATH: &str = "/api/front/courses/related";

/// Catalogue record for the course every scenario asks about.
pub fn course_json() -> Value {
    json!({
        "id": "course-1",
        "slug": "rust-basics",
        "title": "Rust Basics",
        "description": "Ownership, borrowing and lifetimes.",
        "price": 1500,
        "categoryId": "cat-7",
        "category": { "id": "cat-7", "name": "Programming" },
        "lessons": [
            { "id": "l1", "slug": "%E0%A6%B6%E0%A7%81%E0%A6%B0%E0%A7%81", "title": "Start" },
            { "id": "l2", "slug": "traits", "title": "Traits" }
        ],
        "purchases": [],
        "badge": "bestseller"
    })
}

/// A sibling course the viewer has half finished.
pub fn related_json() -> Value {
    json!([{
        "id": "course-2",
        "slug": "async-rust",
        "title": "Async Rust",
        "description": "Futures.",
        "categoryId": "cat-7",
        "category": { "id": "cat-7", "name": "Programming" },
        "lessons": [{ "id": "a1", "slug": "futures" }],
        "purchases": [{ "id": "p9" }],
        "progress": 50
    }])
}

async fn sign_in(session: Session, user_id: web::Path<String>) -> HttpResponse {
    match session.insert(USER_ID_KEY, user_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => HttpResponse::InternalServerError().body(error.to_string()),
    }
}

/// Initialise the application against the backend at `base_url`.
pub async fn init_app(
    base_url: Url,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let api = Arc::new(StorefrontApi::new(base_url, Duration::from_secs(2)).expect("client builds"));
    let service = CourseDataService::new(api.clone(), api.clone(), api.clone(), api);
    let state = HttpState::new(Arc::new(service));
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(session)
            .wrap(Trace)
            .route("/test/sign-in/{user_id}", web::post().to(sign_in))
            .service(web::scope("/api/v1").service(course_data))
            .service(course_page),
    )
    .await
}

/// Sign `user` in and return the resulting session cookie.
pub async fn sign_in_as(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    user: &str,
) -> Cookie<'static> {
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/test/sign-in/{user}"))
            .to_request(),
    )
    .await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}
