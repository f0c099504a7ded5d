// src/accounts/services.rs

use std::sync::Arc;

use storefront_accounts_api::{ApiResponse, RegistrationRequest};
use tracing::Instrument;

use crate::error::AppError;
use crate::storefront::{
    Customer, CustomerCreateInput, CustomerCreateResult, CustomerMutationClient,
    first_error_message,
};

pub struct RegistrationService {
    client: Arc<dyn CustomerMutationClient>,
}

impl RegistrationService {
    pub fn new(client: Arc<dyn CustomerMutationClient>) -> Self {
        Self { client }
    }

    /// Inscription d'un client: raw JSON body in, status and error out.
    ///
    /// Never fails; every error path becomes a 400 or 401 response.
    pub async fn handle(&self, raw_body: &[u8]) -> ApiResponse {
        let span = tracing::info_span!("register", request_id = %uuid::Uuid::new_v4());

        async move {
            match self.register(raw_body).await {
                Ok(customer) => {
                    tracing::info!(customer_id = %customer.id, "Customer account created");
                    ApiResponse::ok()
                }
                Err(err) => ApiResponse::from(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Parses, validates and submits one `customerCreate` mutation.
    ///
    /// The storefront is only called once the form passes validation, and
    /// never more than once.
    pub async fn register(&self, raw_body: &[u8]) -> Result<Customer, AppError> {
        let request: RegistrationRequest = serde_json::from_slice(raw_body)?;
        let input = Self::validate(&request)?;

        match self.client.create_customer(&input).await {
            CustomerCreateResult::Created(customer) => Ok(customer),
            CustomerCreateResult::Rejected(errors) => {
                for e in &errors {
                    tracing::debug!(code = e.code.as_deref(), field = ?e.field, "Storefront user error");
                }
                Err(AppError::domain(first_error_message(&errors)))
            }
            CustomerCreateResult::TransportFailed(err) => Err(AppError::from(err)),
        }
    }

    // === Helpers de validation ===

    fn validate(request: &RegistrationRequest) -> Result<CustomerCreateInput, AppError> {
        let (email, password) = request.credentials().ok_or(AppError::MissingField)?;

        Ok(CustomerCreateInput {
            email: email.to_string(),
            password: password.to_string(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
        })
    }
}
