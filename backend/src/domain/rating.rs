//! Aggregate course rating.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rating statistics for a course.
///
/// The shape belongs to the rating endpoint; the storefront passes it to the
/// renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingResult(Value);

impl RatingResult {
    /// Wrap a raw rating payload.
    #[must_use]
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the raw payload.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
