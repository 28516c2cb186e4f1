//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_access_source;
mod course_catalogue_source;
mod course_page_query;
mod course_rating_source;
mod related_courses_source;

#[cfg(test)]
pub use course_access_source::MockCourseAccessSource;
pub use course_access_source::{
    CourseAccessSource, CourseAccessSourceError, FixtureCourseAccessSource,
};
#[cfg(test)]
pub use course_catalogue_source::MockCourseCatalogueSource;
pub use course_catalogue_source::{
    COURSE_FETCH_FAILED_MESSAGE, CourseCatalogueSource, CourseCatalogueSourceError, CourseLookup,
    FixtureCourseCatalogueSource, INVALID_REQUEST_MESSAGE,
};
#[cfg(test)]
pub use course_page_query::MockCoursePageQuery;
pub use course_page_query::{CoursePageQuery, FixtureCoursePageQuery};
#[cfg(test)]
pub use course_rating_source::MockCourseRatingSource;
pub use course_rating_source::{
    CourseRatingSource, CourseRatingSourceError, FixtureCourseRatingSource,
};
#[cfg(test)]
pub use related_courses_source::MockRelatedCoursesSource;
pub use related_courses_source::{
    FixtureRelatedCoursesSource, RelatedCoursesRequest, RelatedCoursesSource,
    RelatedCoursesSourceError,
};
