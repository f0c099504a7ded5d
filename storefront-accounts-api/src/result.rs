use serde::{Deserialize, Serialize};

use crate::error::ErrorResponse;

/// HTTP status codes the registration API produces.
/// This is WASM-compatible and doesn't depend on axum::http::StatusCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Registration API response.
///
/// A `200` never carries a body; a `400` or `401` always carries an
/// `ErrorResponse` with a non-empty message. The fields are private so the
/// constructors below are the only way to build one.
///
/// # Examples
///
/// ```rust
/// use storefront_accounts_api::{ApiResponse, StatusCode};
///
/// let response = ApiResponse::ok();
/// assert!(response.body().is_none());
///
/// let response = ApiResponse::unauthorized("Email has already been taken");
/// assert_eq!(response.status(), StatusCode::Unauthorized);
/// assert_eq!(response.error_message(), Some("Email has already been taken"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    status: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<ErrorResponse>,
}

/// Used when an error response would otherwise carry an empty message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

impl ApiResponse {
    /// 200 OK, empty body
    pub fn ok() -> Self {
        Self {
            status: StatusCode::Ok,
            body: None,
        }
    }

    /// 400 Bad Request with an error message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(StatusCode::BadRequest, message)
    }

    /// 401 Unauthorized with an error message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::error(StatusCode::Unauthorized, message)
    }

    fn error(status: StatusCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = UNKNOWN_ERROR.to_string();
        }
        Self {
            status,
            body: Some(ErrorResponse::new(message)),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&ErrorResponse> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<ErrorResponse> {
        self.body
    }

    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref().map(|b| b.error.as_str())
    }

    pub fn is_success(&self) -> bool {
        self.status == StatusCode::Ok
    }
}
