//! Wire shapes of the Storefront GraphQL API for `customerCreate`.

use serde::{Deserialize, Serialize};

use super::{
    Customer, CustomerCreateInput, CustomerCreateResult, CustomerUserError, StorefrontError,
};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct CustomerCreateVariables<'a> {
    pub input: &'a CustomerCreateInput,
}

/// `{ data, errors }` envelope. Both halves may be absent or `null`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateData {
    #[serde(default)]
    pub customer_create: Option<CustomerCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePayload {
    #[serde(default)]
    pub customer: Option<CustomerDto>,
    #[serde(default)]
    pub customer_user_errors: Option<Vec<CustomerUserErrorDto>>,
}

#[derive(Debug, Deserialize)]
pub struct CustomerDto {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomerUserErrorDto {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<Vec<String>>,
    #[serde(default)]
    pub message: String,
}

impl From<GraphQlError> for CustomerUserError {
    fn from(err: GraphQlError) -> Self {
        Self {
            code: None,
            field: None,
            message: err.message,
        }
    }
}

impl From<CustomerUserErrorDto> for CustomerUserError {
    fn from(dto: CustomerUserErrorDto) -> Self {
        Self {
            code: dto.code,
            field: dto.field,
            message: dto.message,
        }
    }
}

impl GraphQlResponse<CustomerCreateData> {
    /// Interprets a decoded envelope.
    ///
    /// Any error, top-level or user-facing, makes the call `Rejected` even
    /// when a customer is also present. `Created` requires a non-empty id.
    pub fn into_result(self) -> CustomerCreateResult {
        let top_level = self.errors.unwrap_or_default();
        let Some(data) = self.data else {
            if top_level.is_empty() {
                return CustomerCreateResult::TransportFailed(StorefrontError::EmptyEnvelope);
            }
            return CustomerCreateResult::Rejected(
                top_level.into_iter().map(CustomerUserError::from).collect(),
            );
        };

        let (customer, user_errors) = match data.customer_create {
            Some(payload) => (
                payload.customer,
                payload.customer_user_errors.unwrap_or_default(),
            ),
            None => (None, Vec::new()),
        };

        let errors: Vec<CustomerUserError> = top_level
            .into_iter()
            .map(CustomerUserError::from)
            .chain(user_errors.into_iter().map(CustomerUserError::from))
            .collect();
        if !errors.is_empty() {
            return CustomerCreateResult::Rejected(errors);
        }

        match customer {
            Some(c) if !c.id.is_empty() => CustomerCreateResult::Created(Customer { id: c.id }),
            _ => CustomerCreateResult::Rejected(Vec::new()),
        }
    }
}
