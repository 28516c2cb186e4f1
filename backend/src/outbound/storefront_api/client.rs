//! Shared reqwest client for the storefront backend API.
//!
//! The adapter owns transport details only: endpoint resolution, cache
//! headers, timeouts and reading raw responses. Each port implementation
//! decodes bodies and maps failures into its own error type.

use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use thiserror::Error;

use super::dto::ErrorBodyDto;

const ACCESS_PATH: &str = "api/courses/access";
const COURSE_PATH: &str = "api/front/courses/course";
const RATING_PATH: &str = "api/courses/ratings/averageRating";
const RELATED_PATH: &str = "api/front/courses/related";

/// Failures raised while constructing [`StorefrontApi`].
#[derive(Debug, Error)]
pub enum StorefrontApiError {
    /// The base URL cannot be used to resolve endpoint paths.
    #[error("base URL `{url}` cannot be used for API calls: {message}")]
    InvalidBaseUrl { url: String, message: String },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub(super) struct Endpoints {
    pub(super) access: Url,
    pub(super) course: Url,
    pub(super) rating: Url,
    pub(super) related: Url,
}

impl Endpoints {
    fn resolve(base: &Url) -> Result<Self, StorefrontApiError> {
        if base.cannot_be_a_base() {
            return Err(StorefrontApiError::InvalidBaseUrl {
                url: base.to_string(),
                message: "URL cannot carry a path".to_owned(),
            });
        }
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let join = |path: &str| {
            base.join(path)
                .map_err(|error| StorefrontApiError::InvalidBaseUrl {
                    url: base.to_string(),
                    message: error.to_string(),
                })
        };
        Ok(Self {
            access: join(ACCESS_PATH)?,
            course: join(COURSE_PATH)?,
            rating: join(RATING_PATH)?,
            related: join(RELATED_PATH)?,
        })
    }
}

/// Storefront backend API adapter.
///
/// One client serves the access, catalogue, rating and related-courses
/// ports. Every request carries `Cache-Control: no-store` because purchase,
/// progress and access state change per viewer and per purchase.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use storefront::outbound::storefront_api::StorefrontApi;
///
/// let base = "https://learn.example/backend".parse().expect("valid URL");
/// let api = StorefrontApi::new(base, Duration::from_secs(10)).expect("client builds");
/// # drop(api);
/// ```
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: Client,
    pub(super) endpoints: Endpoints,
}

impl StorefrontApi {
    /// Build an adapter rooted at `base_url` whose requests give up after
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot hold endpoint paths or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, StorefrontApiError> {
        let endpoints = Endpoints::resolve(&base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    pub(super) fn get(&self, url: Url) -> RequestBuilder {
        uncached(self.client.get(url))
    }

    pub(super) fn post(&self, url: Url) -> RequestBuilder {
        uncached(self.client.post(url))
    }

    /// Send `request` and read the whole body.
    pub(super) async fn exchange(
        &self,
        request: RequestBuilder,
    ) -> Result<RawResponse, TransportFailure> {
        let response = request.send().await.map_err(TransportFailure::from)?;
        let status = response.status();
        let body = response.bytes().await.map_err(TransportFailure::from)?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Status and body of a completed exchange.
#[derive(Debug)]
pub(super) struct RawResponse {
    pub(super) status: StatusCode,
    pub(super) body: Vec<u8>,
}

impl RawResponse {
    /// Message reported by the backend in an `{ "error": ... }` body.
    pub(super) fn error_message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorBodyDto>(&self.body)
            .ok()
            .and_then(|dto| dto.error)
            .filter(|message| !message.is_empty())
    }

    /// Backend message, or a compact preview of the body when there is none.
    pub(super) fn failure_detail(&self) -> String {
        self.error_message().unwrap_or_else(|| {
            let preview = body_preview(&self.body);
            if preview.is_empty() {
                format!("status {}", self.status.as_u16())
            } else {
                preview
            }
        })
    }
}

/// An exchange that never produced a complete response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TransportFailure {
    Timeout(String),
    Transport(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

fn uncached(request: RequestBuilder) -> RequestBuilder {
    request
        .header(CACHE_CONTROL, "no-store")
        .header(ACCEPT, "application/json")
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
