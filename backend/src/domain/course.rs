//! Course catalogue records.
//!
//! These mirror the JSON the catalogue endpoint returns. Fields the
//! storefront does not interpret are kept in `extra` maps so a record can be
//! handed to the renderer unmodified.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Validation errors returned by [`CourseSlug::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseSlugValidationError {
    Empty,
    Padded,
    ContainsSeparator,
}

impl fmt::Display for CourseSlugValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "course slug must not be empty"),
            Self::Padded => write!(f, "course slug must not contain surrounding whitespace"),
            Self::ContainsSeparator => write!(f, "course slug must not contain '/'"),
        }
    }
}

impl std::error::Error for CourseSlugValidationError {}

/// External, human-readable course identifier.
///
/// Storefront slugs are localised, so any non-separator Unicode is accepted.
///
/// # Examples
/// ```
/// use storefront::domain::CourseSlug;
///
/// let slug = CourseSlug::new("ওয়েব-ডেভেলপমেন্ট").expect("valid slug");
/// assert_eq!(slug.as_ref(), "ওয়েব-ডেভেলপমেন্ট");
/// assert!(CourseSlug::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseSlug(String);

impl CourseSlug {
    /// Validate and construct a slug.
    pub fn new(raw: impl Into<String>) -> Result<Self, CourseSlugValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CourseSlugValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(CourseSlugValidationError::Padded);
        }
        if raw.contains('/') {
            return Err(CourseSlugValidationError::ContainsSeparator);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for CourseSlug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CourseSlug> for String {
    fn from(value: CourseSlug) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseSlug {
    type Error = CourseSlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Catalogue identifiers arrive as strings or bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(Number),
}

impl From<IdRepr> for String {
    fn from(value: IdRepr) -> Self {
        match value {
            IdRepr::Text(text) => text,
            IdRepr::Number(number) => number.to_string(),
        }
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    IdRepr::deserialize(deserializer).map(String::from)
}

fn lenient_optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<IdRepr>::deserialize(deserializer).map(|id| id.map(String::from))
}

/// Category a course is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCategory {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One lesson; its position in [`Course::lessons`] is its display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Purchase record of the requesting viewer. Only its presence matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Purchase(Value);

impl Purchase {
    /// Wrap a raw purchase record.
    #[must_use]
    pub fn new(record: Value) -> Self {
        Self(record)
    }
}

/// Course record as returned by the catalogue endpoint.
///
/// `purchases` and `progress` are only populated when the catalogue was asked
/// on behalf of a viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price as sent, either a JSON number or a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CourseCategory>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    /// Completion percentage in `0..=100`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    /// Numeric price, reading decimal strings such as `"1200.00"` too.
    #[must_use]
    pub fn price_amount(&self) -> Option<f64> {
        match self.price.as_ref()? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Category identifier, falling back to the embedded category record.
    #[must_use]
    pub fn category_id(&self) -> Option<&str> {
        self.category_id
            .as_deref()
            .or_else(|| self.category.as_ref().map(|category| category.id.as_str()))
    }

    /// Display name of the category, if the catalogue embedded one.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }

    /// Slug of the lesson shown first.
    #[must_use]
    pub fn first_lesson_slug(&self) -> Option<&str> {
        self.lessons.first().map(|lesson| lesson.slug.as_str())
    }

    /// Whether the viewer holds at least one purchase record.
    #[must_use]
    pub fn is_purchased(&self) -> bool {
        !self.purchases.is_empty()
    }

    /// Whether progress tracking has started for the viewer.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }

    /// Whether the viewer finished every lesson.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_some_and(|progress| progress >= 100.0)
    }
}
