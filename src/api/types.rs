//! API request and response types

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData::from(err)),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Query parameters for a giftee lookup (`/query?name=...`)
#[derive(Debug, Default, Deserialize)]
pub struct LookupRequest {
    /// Giver to look up
    #[serde(default)]
    pub name: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Lookup response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupData {
    /// The participant who asked
    pub giver: String,
    /// The participant they buy for
    pub giftee: String,
}

/// Status endpoint response data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusData {
    /// Number of people in the draw
    pub participants: usize,
}
