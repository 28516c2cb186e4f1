//! Shared cache-control policy for HTTP handlers.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// Per-viewer responses must never be stored by shared or private caches.
pub const NO_STORE: &str = "no-store";

/// Build the cache-control header tuple for per-viewer responses.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use storefront::inbound::http::cache_control::no_store;
///
/// let response = HttpResponse::Ok().insert_header(no_store()).finish();
/// assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
/// ```
pub const fn no_store() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}
