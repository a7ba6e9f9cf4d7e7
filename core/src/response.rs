use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorCode;

/// Uniform envelope around every RushCrew response body.
///
/// Exactly one of `data`/`error` is populated; the other side is omitted from
/// the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ErrorResponse) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Client-facing error body. `code` is the stable identifier from the
/// [`ErrorCode`] registry; `message` is informational text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    /// Field-level validation details. Omitted from the JSON when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ErrorResponse {
    /// Body for a plain classified error.
    pub fn of(code: ErrorCode) -> Self {
        Self {
            status_code: code.http_status(),
            code: code.name().to_string(),
            message: code.message().to_string(),
            errors: Vec::new(),
        }
    }

    /// Body for a validation failure, carrying the per-field details in the
    /// order the producing layer reported them.
    pub fn of_validation(code: ErrorCode, errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            ..Self::of(code)
        }
    }
}

/// One invalid input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
