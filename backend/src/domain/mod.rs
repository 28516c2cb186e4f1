//! Domain primitives, aggregates and services.
//!
//! Purpose: model the course detail flow independently of HTTP. Types here
//! carry no framework derives beyond serde; inbound and outbound adapters
//! translate at the edges.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - Course, CourseSlug, UserId — catalogue records and identifiers.
//! - CourseDataService — aggregation behind [`ports::CoursePageQuery`].

pub mod course;
pub mod course_access;
pub mod course_data;
pub mod course_data_service;
pub mod course_page;
pub mod error;
pub mod numerals;
pub mod ports;
pub mod rating;
pub mod trace_id;
pub mod user;

pub use self::course::{
    Course, CourseCategory, CourseSlug, CourseSlugValidationError, Lesson, Purchase,
};
pub use self::course_access::{ACCESS_CHECK_FAILED_MESSAGE, ACCESS_DENIED_MESSAGE, AccessResult};
pub use self::course_data::{
    CourseData, CourseDataErrorKind, CourseDataFailure, CourseDataOutcome, CourseDataStage,
};
pub use self::course_data_service::CourseDataService;
pub use self::course_page::{
    CARD_EXCERPT_CHARS, CourseHero, CoursePage, CoursePageOutcome, CourseSidebar,
    DESCRIPTION_EXCERPT_CHARS, LessonEntry, LessonLocation, RelatedCourseCard,
};
pub use self::error::{Error, ErrorCode};
pub use self::numerals::{lesson_count_label, to_bengali_digits};
pub use self::rating::RatingResult;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USER_ID_MAX, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use storefront::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such course"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
