//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CoursePageQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub course_pages: Arc<dyn CoursePageQuery>,
}

impl HttpState {
    /// Construct state from the course page port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use storefront::domain::ports::FixtureCoursePageQuery;
    /// use storefront::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCoursePageQuery));
    /// let _pages = state.course_pages.clone();
    /// ```
    pub fn new(course_pages: Arc<dyn CoursePageQuery>) -> Self {
        Self { course_pages }
    }
}
