//! # storefront-accounts-api
//!
//! Shared API types for the storefront-accounts service.
//! This crate stays free of server dependencies so the storefront frontend
//! (WASM) can decode the same payloads the backend produces.
//!
//! ## Features
//!
//! - Request DTO (`RegistrationRequest`)
//! - Error body format (`ErrorResponse`)
//! - Response wrapper with its status invariant (`ApiResponse`)
//!
//! ## Example
//!
//! ```rust
//! use storefront_accounts_api::{ApiResponse, RegistrationRequest, StatusCode};
//!
//! let request: RegistrationRequest =
//!     serde_json::from_str(r#"{"email":"a@b.com","password":"secret1"}"#).unwrap();
//! assert_eq!(request.credentials(), Some(("a@b.com", "secret1")));
//!
//! let response = ApiResponse::bad_request("Email and password are required");
//! assert_eq!(response.status(), StatusCode::BadRequest);
//! ```

pub mod error;
pub mod requests;
pub mod result;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use result::{ApiResponse, StatusCode, UNKNOWN_ERROR};
