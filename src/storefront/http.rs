//! Reqwest-backed Storefront API adapter.
//!
//! Owns transport details only: request serialisation, the access token
//! header, HTTP error mapping and envelope decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{CustomerCreateData, CustomerCreateVariables, GraphQlRequest, GraphQlResponse};
use super::{CustomerCreateInput, CustomerCreateResult, CustomerMutationClient, StorefrontError};

pub const STOREFRONT_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

pub const CUSTOMER_CREATE_MUTATION: &str = r"mutation customerCreate($input: CustomerCreateInput!) {
  customerCreate(input: $input) {
    customer {
      id
    }
    customerUserErrors {
      code
      field
      message
    }
  }
}";

/// Builds `https://{domain}/api/{version}/graphql.json`.
///
/// A scheme or trailing slash on `domain` is tolerated.
pub fn storefront_endpoint(domain: &str, api_version: &str) -> Result<Url, url::ParseError> {
    let host = domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    if host.is_empty() {
        return Err(url::ParseError::EmptyHost);
    }
    Url::parse(&format!(
        "https://{host}/api/{}/graphql.json",
        api_version.trim()
    ))
}

/// Storefront API client that POSTs GraphQL documents to one endpoint.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl StorefrontClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: access_token.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn execute(
        &self,
        input: &CustomerCreateInput,
    ) -> Result<GraphQlResponse<CustomerCreateData>, StorefrontError> {
        let body = GraphQlRequest {
            query: CUSTOMER_CREATE_MUTATION,
            variables: CustomerCreateVariables { input },
        };
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(STOREFRONT_TOKEN_HEADER, self.access_token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|error| {
            StorefrontError::Decode(format!("invalid GraphQL envelope: {error}"))
        })
    }
}

#[async_trait]
impl CustomerMutationClient for StorefrontClient {
    async fn create_customer(&self, input: &CustomerCreateInput) -> CustomerCreateResult {
        match self.execute(input).await {
            Ok(envelope) => envelope.into_result(),
            Err(err) => CustomerCreateResult::TransportFailed(err),
        }
    }
}

fn map_transport_error(error: reqwest::Error) -> StorefrontError {
    if error.is_timeout() {
        StorefrontError::Timeout(error.to_string())
    } else {
        StorefrontError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StorefrontError {
    StorefrontError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
