//! Commerce platform collaborator.
//!
//! The registration flow only needs one capability from the Storefront API:
//! running the `customerCreate` mutation. `CustomerMutationClient` is that
//! seam; `http::StorefrontClient` is the production adapter and tests swap in
//! `fake::FakeCustomerClient`.

pub mod dto;
#[cfg(test)]
pub mod fake;
pub mod http;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

/// A customer created by the Storefront API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Opaque global id, e.g. `gid://shopify/Customer/1`.
    pub id: String,
}

/// A user-facing rejection returned alongside a successful transport call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerUserError {
    pub code: Option<String>,
    pub field: Option<Vec<String>>,
    pub message: String,
}

/// Input of the `customerCreate` mutation. Unset names are omitted.
#[derive(Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateInput {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl fmt::Debug for CustomerCreateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerCreateInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Outcome of one `customerCreate` call. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerCreateResult {
    Created(Customer),
    /// Top-level GraphQL errors first, then `customerUserErrors`.
    Rejected(Vec<CustomerUserError>),
    TransportFailed(StorefrontError),
}

/// Failures to complete a Storefront API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorefrontError {
    #[error("storefront transport failed: {0}")]
    Transport(String),
    #[error("storefront request timed out: {0}")]
    Timeout(String),
    #[error("storefront responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("storefront response decode failed: {0}")]
    Decode(String),
    #[error("storefront response had neither data nor errors")]
    EmptyEnvelope,
}

/// Runs the `customerCreate` mutation against the commerce platform.
#[async_trait]
pub trait CustomerMutationClient: Send + Sync {
    async fn create_customer(&self, input: &CustomerCreateInput) -> CustomerCreateResult;
}

/// First non-empty message of a rejection, if any.
pub fn first_error_message(errors: &[CustomerUserError]) -> Option<&str> {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .find(|m| !m.is_empty())
}
