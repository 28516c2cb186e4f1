//! Course detail domain service.
//!
//! Implements [`CoursePageQuery`] by orchestrating the access, catalogue,
//! related-courses and rating ports. Every failure ends either in a
//! fail-closed access decision, a missing rating, or the not-found outcome;
//! nothing is surfaced to the caller as an error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    CourseAccessSource, CourseCatalogueSource, CourseLookup, CoursePageQuery, CourseRatingSource,
    INVALID_REQUEST_MESSAGE, RelatedCoursesRequest, RelatedCoursesSource,
};
use crate::domain::{
    AccessResult, Course, CourseData, CourseDataFailure, CourseDataOutcome, CourseDataStage,
    CoursePage, CoursePageOutcome, CourseSlug, LessonLocation, RatingResult, UserId,
};

/// Course detail service implementing the driving port.
#[derive(Clone)]
pub struct CourseDataService<A, C, R, T> {
    access: Arc<A>,
    catalogue: Arc<C>,
    related: Arc<R>,
    ratings: Arc<T>,
}

impl<A, C, R, T> CourseDataService<A, C, R, T> {
    /// Create a service over the given ports.
    pub fn new(access: Arc<A>, catalogue: Arc<C>, related: Arc<R>, ratings: Arc<T>) -> Self {
        Self {
            access,
            catalogue,
            related,
            ratings,
        }
    }
}

impl<A, C, R, T> CourseDataService<A, C, R, T>
where
    A: CourseAccessSource,
    C: CourseCatalogueSource,
    R: RelatedCoursesSource,
    T: CourseRatingSource,
{
    /// Access decision for `viewer`; anonymous viewers never have access.
    async fn check_access(&self, slug: &CourseSlug, viewer: Option<&UserId>) -> AccessResult {
        let Some(user_id) = viewer else {
            return AccessResult::from_flag(false);
        };
        match self.access.check_access(slug, user_id).await {
            Ok(result) => result,
            Err(error) => {
                warn!(course_slug = %slug, error = %error, "course access check failed");
                AccessResult::check_failed()
            }
        }
    }

    async fn fetch_course(
        &self,
        slug: &CourseSlug,
        viewer: Option<&UserId>,
    ) -> Result<Course, CourseDataFailure> {
        let lookup = CourseLookup {
            slug: slug.clone(),
            viewer: viewer.cloned(),
        };
        self.catalogue.fetch_course(&lookup).await.map_err(|error| {
            warn!(course_slug = %slug, error = %error, "course fetch failed");
            CourseDataFailure {
                stage: CourseDataStage::Course,
                kind: error.kind(),
                message: error.public_message().to_owned(),
            }
        })
    }

    async fn fetch_related(
        &self,
        course: &Course,
        user_id: &UserId,
    ) -> Result<Vec<Course>, CourseDataFailure> {
        let request = RelatedCoursesRequest {
            user_id: user_id.clone(),
            category_id: course.category_id().map(str::to_owned),
            current_course_id: course.id.clone(),
        };
        self.related.related_courses(&request).await.map_err(|error| {
            warn!(course_id = %course.id, error = %error, "related courses fetch failed");
            CourseDataFailure {
                stage: CourseDataStage::RelatedCourses,
                kind: error.kind(),
                message: INVALID_REQUEST_MESSAGE.to_owned(),
            }
        })
    }

    /// Rating for `course_id`, or `None` when it could not be fetched.
    async fn fetch_rating(&self, course_id: &str) -> Option<RatingResult> {
        match self.ratings.average_rating(course_id).await {
            Ok(rating) => Some(rating),
            Err(error) => {
                warn!(course_id, error = %error, "course rating fetch failed");
                None
            }
        }
    }

    async fn aggregate(
        &self,
        slug: &CourseSlug,
        viewer: Option<UserId>,
    ) -> Result<CourseData, CourseDataFailure> {
        let (access, course) = tokio::join!(
            self.check_access(slug, viewer.as_ref()),
            self.fetch_course(slug, viewer.as_ref()),
        );
        let course = course?;

        let related_courses = match viewer.as_ref() {
            Some(user_id) => self.fetch_related(&course, user_id).await?,
            None => Vec::new(),
        };

        Ok(CourseData {
            access: access.access,
            related_courses,
            course,
            user_id: viewer,
        })
    }
}

#[async_trait]
impl<A, C, R, T> CoursePageQuery for CourseDataService<A, C, R, T>
where
    A: CourseAccessSource,
    C: CourseCatalogueSource,
    R: RelatedCoursesSource,
    T: CourseRatingSource,
{
    async fn course_data(&self, slug: &CourseSlug, viewer: Option<UserId>) -> CourseDataOutcome {
        match self.aggregate(slug, viewer).await {
            Ok(data) => CourseDataOutcome::Found(Box::new(data)),
            Err(failure) => CourseDataOutcome::NotFound(failure),
        }
    }

    async fn course_page(&self, slug: &CourseSlug, viewer: Option<UserId>) -> CoursePageOutcome {
        let data = match self.aggregate(slug, viewer).await {
            Ok(data) => data,
            Err(failure) => return CoursePageOutcome::NotFound(failure),
        };

        if data.access {
            let location = LessonLocation::first_lesson(&data.course);
            debug!(course_slug = %slug, location = %location.path(), "viewer has access");
            return CoursePageOutcome::Redirect(location);
        }

        let rating = self.fetch_rating(&data.course.id).await;
        CoursePageOutcome::Page(Box::new(CoursePage::assemble(data, rating)))
    }
}

#[cfg(test)]
#[path = "course_data_service_tests.rs"]
mod tests;
