// src/error.rs

use storefront_accounts_api::{ApiResponse, StatusCode, UNKNOWN_ERROR};

use crate::storefront::StorefrontError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Email and password are required";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Registration failures. Only the status and message reach the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs de Validation ===
    #[error("Email and password are required")]
    MissingField,
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    // === Erreurs métier ===
    /// The storefront rejected the customer; carries the first usable message.
    #[error("Customer creation rejected")]
    DomainError(Option<String>),

    // === Erreurs externes ===
    #[error(transparent)]
    TransportError(#[from] StorefrontError),
}

impl AppError {
    /// Récupère le status et le message public de l'erreur
    fn get_error_info(&self) -> (StatusCode, &'static str, String) {
        match self {
            // 400 Bad Request
            AppError::MissingField => (
                StatusCode::BadRequest,
                "MISSING_FIELD",
                REQUIRED_FIELDS_MESSAGE.to_string(),
            ),
            AppError::MalformedInput(_) => (
                StatusCode::BadRequest,
                "MALFORMED_INPUT",
                INVALID_BODY_MESSAGE.to_string(),
            ),

            // 401 Unauthorized
            AppError::DomainError(message) => (
                StatusCode::Unauthorized,
                "CUSTOMER_REJECTED",
                message.clone().unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ),
            AppError::TransportError(_) => (
                StatusCode::Unauthorized,
                "STOREFRONT_UNAVAILABLE",
                UNKNOWN_ERROR.to_string(),
            ),
        }
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        AppError::MalformedInput(msg.into())
    }

    pub fn domain(msg: Option<&str>) -> Self {
        AppError::DomainError(msg.map(str::to_string))
    }

    /// Retourne le code de statut HTTP
    #[cfg(test)]
    pub fn status_code(&self) -> StatusCode {
        self.get_error_info().0
    }
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        let (_, error_code, message) = err.get_error_info();

        match &err {
            AppError::MissingField => {
                tracing::debug!(error_code, "Rejected incomplete form");
                ApiResponse::bad_request(message)
            }
            AppError::MalformedInput(detail) => {
                tracing::debug!(error_code, detail = detail.as_str(), "Rejected malformed body");
                ApiResponse::bad_request(message)
            }
            AppError::DomainError(_) => {
                tracing::info!(error_code, reason = message.as_str(), "Customer creation rejected");
                ApiResponse::unauthorized(message)
            }
            AppError::TransportError(detail) => {
                tracing::error!(error_code, %detail, "Storefront call failed");
                ApiResponse::unauthorized(message)
            }
        }
    }
}

// Depuis serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::malformed_input(format!("JSON error: {err}"))
    }
}
