//! Driven port for the course catalogue endpoint.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Course, CourseSlug, UserId};

/// Visitor-facing text for requests the catalogue rejected.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Visitor-facing text for catalogue calls that did not complete.
pub const COURSE_FETCH_FAILED_MESSAGE: &str = "Error occurred while fetching course";

/// Course lookup on behalf of an optional viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLookup {
    /// Course to fetch.
    pub slug: CourseSlug,
    /// When present the catalogue fills in purchases and progress for this
    /// viewer.
    pub viewer: Option<UserId>,
}

define_port_error! {
    /// Failures raised while fetching a course record.
    ///
    /// Messages carry backend detail for logs; use
    /// [`CourseCatalogueSourceError::public_message`] for anything shown to a
    /// visitor.
    pub enum CourseCatalogueSourceError {
        /// The catalogue has no course with this slug.
        NotFound { message: String } =>
            "course not found: {message}"; kind: NotFound,
        /// The catalogue refused the viewer.
        Unauthorized { message: String } =>
            "course fetch unauthorised: {message}"; kind: Unauthorized,
        /// Any other non-success status.
        Rejected { status: u16, message: String } =>
            "course fetch rejected with status {status}: {message}"; kind: Unknown,
        /// The request never produced a response.
        Transport { message: String } =>
            "course fetch transport failed: {message}"; kind: UpstreamUnavailable,
        /// The catalogue did not answer in time.
        Timeout { message: String } =>
            "course fetch timed out: {message}"; kind: UpstreamUnavailable,
        /// The success body was not a course record.
        Decode { message: String } =>
            "course response decode failed: {message}"; kind: Unknown,
    }
}

impl CourseCatalogueSourceError {
    /// Generic message safe to surface; never includes backend detail.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::Unauthorized { .. } | Self::Rejected { .. } => {
                INVALID_REQUEST_MESSAGE
            }
            Self::Transport { .. } | Self::Timeout { .. } | Self::Decode { .. } => {
                COURSE_FETCH_FAILED_MESSAGE
            }
        }
    }
}

/// Port fetching full course records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogueSource: Send + Sync {
    /// Fetch the course identified by `lookup.slug`.
    ///
    /// Implementations must not serve this from a cache: purchase and
    /// progress fields must reflect the viewer's latest state.
    async fn fetch_course(&self, lookup: &CourseLookup)
    -> Result<Course, CourseCatalogueSourceError>;
}

/// Fixture catalogue that knows no courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCourseCatalogueSource;

#[async_trait]
impl CourseCatalogueSource for FixtureCourseCatalogueSource {
    async fn fetch_course(
        &self,
        lookup: &CourseLookup,
    ) -> Result<Course, CourseCatalogueSourceError> {
        Err(CourseCatalogueSourceError::not_found(lookup.slug.to_string()))
    }
}
