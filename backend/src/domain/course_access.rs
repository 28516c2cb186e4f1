//! Access decisions for course content.

use serde::{Deserialize, Serialize};

/// Denial message used when the access endpoint gives no reason.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";

/// Denial message used when the access check itself failed.
pub const ACCESS_CHECK_FAILED_MESSAGE: &str = "Error occurred while checking access";

/// Whether a viewer may consume a course's lessons.
///
/// `message` explains a denial; it is informational and callers are free to
/// ignore it.
///
/// # Examples
/// ```
/// use storefront::domain::AccessResult;
///
/// let denied = AccessResult::denied("Purchase required");
/// assert!(!denied.access);
/// assert_eq!(denied.message.as_deref(), Some("Purchase required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResult {
    /// Whether the viewer may open the lessons.
    pub access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccessResult {
    /// Decision reported by the access endpoint, without a message.
    #[must_use]
    pub const fn from_flag(access: bool) -> Self {
        Self {
            access,
            message: None,
        }
    }

    /// Access granted.
    #[must_use]
    pub const fn granted() -> Self {
        Self::from_flag(true)
    }

    /// Access denied for the given reason.
    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            access: false,
            message: Some(message.into()),
        }
    }

    /// Fail-closed result used when the check could not be completed.
    #[must_use]
    pub fn check_failed() -> Self {
        Self::denied(ACCESS_CHECK_FAILED_MESSAGE)
    }
}
