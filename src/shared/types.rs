use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};

/// Body of a bare successful mutation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: String) -> Self {
        Self {
            success: false,
            error,
            message,
        }
    }
}

/// Row id taken from a URL segment.
///
/// Only plain decimal digits are accepted, so `-1` and `+5` do not match
/// a route, and neither does a value past `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(i32);

impl ResourceId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(D::Error::custom(format!("expected a non-negative id, got {:?}", raw)));
        }
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| D::Error::custom(format!("id out of range: {}", raw)))
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// 1-indexed page of the question list.
///
/// Built leniently from the raw `page` query value: a missing or
/// non-numeric value means the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE,
        }
    }
}

impl Page {
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(|number| Self { number })
            .unwrap_or_default()
    }

    /// Rows per page
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE
    }

    /// SQL OFFSET of the first row, or `None` when the page cannot hold any rows
    pub fn offset(&self) -> Option<i64> {
        if self.number < 1 {
            return None;
        }
        (self.number - 1).checked_mul(self.limit())
    }
}
