//! Aggregated course data handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{Course, UserId};

/// Why an aggregation ended in the not-found outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseDataErrorKind {
    /// The catalogue does not know the course.
    NotFound,
    /// The backend refused the request on behalf of this viewer.
    Unauthorized,
    /// The backend could not be reached or timed out.
    UpstreamUnavailable,
    /// Anything else, including undecodable responses.
    Unknown,
}

/// Step of the aggregation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseDataStage {
    /// Fetching the course record from the catalogue.
    Course,
    /// Fetching courses recommended alongside it.
    RelatedCourses,
}

/// Failure detail attached to the not-found outcome.
///
/// `message` is the generic text safe to show a visitor; backend detail only
/// reaches the logs.
///
/// # Examples
/// ```
/// use storefront::domain::{CourseDataErrorKind, CourseDataFailure, CourseDataStage};
///
/// let failure = CourseDataFailure {
///     stage: CourseDataStage::RelatedCourses,
///     kind: CourseDataErrorKind::Unauthorized,
///     message: "Course not found".to_owned(),
/// };
/// let json = serde_json::to_value(&failure).expect("serialise");
/// assert_eq!(json["stage"], "related_courses");
/// assert_eq!(json["kind"], "unauthorized");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDataFailure {
    /// Aggregation step that failed.
    pub stage: CourseDataStage,
    /// Failure category derived from the port error.
    pub kind: CourseDataErrorKind,
    /// Visitor-facing text.
    pub message: String,
}

/// Everything the course page needs besides the rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    /// Whether the viewer may open the lessons.
    pub access: bool,
    /// Recommendations in backend order; empty for anonymous visitors.
    pub related_courses: Vec<Course>,
    /// The requested course, passed through as the catalogue sent it.
    pub course: Course,
    /// Viewer the data was gathered for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Result of aggregating course data; never an error path.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseDataOutcome {
    /// The course exists; everything the page needs is attached.
    Found(Box<CourseData>),
    /// The course or its recommendations could not be fetched.
    NotFound(CourseDataFailure),
}

impl CourseDataOutcome {
    /// The aggregate, when the course was found.
    #[must_use]
    pub fn found(self) -> Option<CourseData> {
        match self {
            Self::Found(data) => Some(*data),
            Self::NotFound(_) => None,
        }
    }

    /// The failure, when the aggregation ended in not-found.
    #[must_use]
    pub fn failure(&self) -> Option<&CourseDataFailure> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(failure) => Some(failure),
        }
    }
}
