//! Wire DTOs for the storefront backend API.
//!
//! Request bodies borrow from domain values; response bodies are decoded here
//! before being turned into domain records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AccessRequestDto<'a> {
    pub(super) course_slug: &'a str,
    pub(super) user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct AccessResponseDto {
    pub(super) access: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CourseRequestDto<'a> {
    pub(super) course_slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) user_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RelatedRequestDto<'a> {
    pub(super) user_id: &'a str,
    pub(super) category_id: Option<&'a str>,
    pub(super) current_course_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RatingQueryDto<'a> {
    pub(super) course_id: &'a str,
}

/// Body of a non-success response.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) error: Option<String>,
}
