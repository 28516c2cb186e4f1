//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use storefront::Trace;
#[cfg(debug_assertions)]
use storefront::doc::ApiDoc;
use storefront::domain::CourseDataService;
use storefront::inbound::http::courses::{course_data, course_page};
use storefront::inbound::http::health::{HealthState, live, ready};
use storefront::inbound::http::session_config::SessionSettings;
use storefront::inbound::http::state::HttpState;
use storefront::outbound::storefront_api::StorefrontApi;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    // Must match the login flow's cookie, which this service only reads.
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(Trace)
        .service(web::scope("/api/v1").service(course_data))
        .service(course_page)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Wire the backend API adapter into the course detail service.
fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let api = Arc::new(
        StorefrontApi::new(config.api_base_url.clone(), config.request_timeout)
            .map_err(std::io::Error::other)?,
    );
    let service = CourseDataService::new(api.clone(), api.clone(), api.clone(), api);
    Ok(HttpState::new(Arc::new(service)))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when the HTTP client cannot be built or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config)?);
    let ServerConfig {
        session:
            SessionSettings {
                key,
                cookie_secure,
                same_site,
            },
        bind_addr,
        api_base_url,
        request_timeout,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(
        %bind_addr,
        api_base_url = %api_base_url,
        request_timeout_secs = request_timeout.as_secs(),
        "storefront listening"
    );
    health_state.mark_ready();
    Ok(server)
}
