//! Course page model assembled from aggregated course data.
//!
//! The storefront renderer consumes this model; every derived value (lesson
//! labels, excerpts, links) is decided here so the renderer stays dumb.

use std::borrow::Cow;

use serde::Serialize;

use super::{
    Course, CourseData, CourseDataFailure, RatingResult, UserId, lesson_count_label,
};

/// Characters of the description shown on the course page.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 1200;

/// Characters of the description shown on a related-course card.
pub const CARD_EXCERPT_CHARS: usize = 200;

/// Lesson playback location a purchaser is sent to.
///
/// Catalogue lesson slugs may arrive percent-encoded; they are decoded once
/// so the same lesson always yields the same location.
///
/// # Examples
/// ```
/// use storefront::domain::LessonLocation;
///
/// let location = LessonLocation::new("rust", "hello%20world");
/// assert_eq!(location.path(), "/courses/rust/hello world");
/// assert_eq!(location.encoded_path(), "/courses/rust/hello%20world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonLocation {
    course_slug: String,
    lesson_slug: String,
}

impl LessonLocation {
    /// Location of `lesson_slug` inside the course `course_slug`.
    pub fn new(course_slug: impl Into<String>, lesson_slug: &str) -> Self {
        Self {
            course_slug: course_slug.into(),
            lesson_slug: decode_segment(lesson_slug).into_owned(),
        }
    }

    /// First lesson of `course`; the lesson segment is empty when the course
    /// has no lessons yet.
    #[must_use]
    pub fn first_lesson(course: &Course) -> Self {
        Self::new(course.slug.clone(), course.first_lesson_slug().unwrap_or_default())
    }

    /// Human-readable path, suitable for links in rendered pages.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/courses/{}/{}", self.course_slug, self.lesson_slug)
    }

    /// Percent-encoded path, suitable for a `Location` header.
    #[must_use]
    pub fn encoded_path(&self) -> String {
        format!(
            "/courses/{}/{}",
            urlencoding::encode(&self.course_slug),
            urlencoding::encode(&self.lesson_slug)
        )
    }
}

fn decode_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

fn leading_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn course_path(course: &Course) -> String {
    format!("/courses/{}", course.slug)
}

/// Banner at the top of the course page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseHero {
    pub title: String,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub lesson_count: usize,
    pub lesson_count_label: String,
    pub rating: Option<RatingResult>,
}

/// One row of the lesson accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonEntry {
    /// One-based display position.
    pub position: usize,
    pub label: String,
    pub id: String,
    pub slug: String,
    pub title: Option<String>,
    pub locked: bool,
}

/// Purchase panel beside the course content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSidebar {
    pub authenticated: bool,
    pub purchased: bool,
    pub progress: Option<f64>,
    pub price: Option<f64>,
    pub lesson_count: usize,
}

/// Card for a course recommended next to the one being viewed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCourseCard {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
    pub category_link: Option<String>,
    pub lesson_count: usize,
    pub lesson_count_label: String,
    pub excerpt: Option<String>,
    pub purchased: bool,
    pub progress: Option<f64>,
    pub progress_complete: bool,
    /// Continue into the first lesson once progress exists, otherwise open
    /// the course page.
    pub link: String,
}

impl RelatedCourseCard {
    /// Build the card for `course` as seen by a viewer who is or is not
    /// signed in.
    #[must_use]
    pub fn for_viewer(course: &Course, authenticated: bool) -> Self {
        let link = if authenticated && course.has_progress() {
            LessonLocation::first_lesson(course).path()
        } else {
            course_path(course)
        };
        Self {
            id: course.id.clone(),
            slug: course.slug.clone(),
            title: course.title.clone(),
            image_url: course.image_url.clone(),
            category_name: course.category_name().map(str::to_owned),
            category_link: course
                .category_id()
                .map(|id| format!("/courses/category?categoryId={id}")),
            lesson_count: course.lessons.len(),
            lesson_count_label: lesson_count_label(course.lessons.len()),
            excerpt: course
                .description
                .as_deref()
                .map(|text| leading_chars(text, CARD_EXCERPT_CHARS)),
            purchased: course.is_purchased(),
            progress: course.progress,
            progress_complete: course.is_complete(),
            link,
        }
    }
}

/// Model of the course detail page for a viewer without access.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePage {
    pub access: bool,
    pub user_id: Option<UserId>,
    pub hero: CourseHero,
    pub lessons: Vec<LessonEntry>,
    /// Leading description text followed by an ellipsis.
    pub description: Option<String>,
    pub sidebar: CourseSidebar,
    pub related_courses: Vec<RelatedCourseCard>,
    pub course: Course,
}

impl CoursePage {
    /// Assemble the page from aggregated data and an optional rating.
    #[must_use]
    pub fn assemble(data: CourseData, rating: Option<RatingResult>) -> Self {
        let CourseData {
            access,
            related_courses,
            course,
            user_id,
        } = data;
        let authenticated = user_id.is_some();
        let lesson_count = course.lessons.len();

        let lessons = course
            .lessons
            .iter()
            .enumerate()
            .map(|(index, lesson)| LessonEntry {
                position: index + 1,
                label: format!("Lesson - {}", index + 1),
                id: lesson.id.clone(),
                slug: lesson.slug.clone(),
                title: lesson.title.clone(),
                locked: !access,
            })
            .collect();

        let hero = CourseHero {
            title: course.title.clone(),
            category_name: course.category_name().map(str::to_owned),
            image_url: course.image_url.clone(),
            lesson_count,
            lesson_count_label: lesson_count_label(lesson_count),
            rating,
        };

        let sidebar = CourseSidebar {
            authenticated,
            purchased: course.is_purchased(),
            progress: course.progress,
            price: course.price_amount(),
            lesson_count,
        };

        let description = course
            .description
            .as_deref()
            .map(|text| format!("{}...", leading_chars(text, DESCRIPTION_EXCERPT_CHARS)));

        let related_courses = related_courses
            .iter()
            .map(|related| RelatedCourseCard::for_viewer(related, authenticated))
            .collect();

        Self {
            access,
            user_id,
            hero,
            lessons,
            description,
            sidebar,
            related_courses,
            course,
        }
    }
}

/// What the course page endpoint should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CoursePageOutcome {
    /// The viewer has access; send them into playback.
    Redirect(LessonLocation),
    /// Render the detail page.
    Page(Box<CoursePage>),
    /// No course to show.
    NotFound(CourseDataFailure),
}

#[cfg(test)]
#[path = "course_page_tests.rs"]
mod tests;
