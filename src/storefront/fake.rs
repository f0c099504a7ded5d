use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    Customer, CustomerCreateInput, CustomerCreateResult, CustomerMutationClient, CustomerUserError,
};

pub const EMAIL_TAKEN: &str = "Email has already been taken";

/// In-memory stand-in for the Storefront API.
///
/// Without a canned result it behaves like the real shop: a new email
/// creates a customer, a repeated one is rejected with `TAKEN`.
#[derive(Default)]
pub struct FakeCustomerClient {
    canned: Option<CustomerCreateResult>,
    registered: Mutex<HashSet<String>>,
    last_input: Mutex<Option<CustomerCreateInput>>,
    calls: AtomicUsize,
}

impl FakeCustomerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every call with `result`.
    pub fn responding(result: CustomerCreateResult) -> Self {
        Self {
            canned: Some(result),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_input(&self) -> Option<CustomerCreateInput> {
        self.last_input.lock().await.clone()
    }
}

#[async_trait]
impl CustomerMutationClient for FakeCustomerClient {
    async fn create_customer(&self, input: &CustomerCreateInput) -> CustomerCreateResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_input.lock().await = Some(input.clone());

        if let Some(result) = &self.canned {
            return result.clone();
        }

        let mut registered = self.registered.lock().await;
        if !registered.insert(input.email.to_lowercase()) {
            return CustomerCreateResult::Rejected(vec![CustomerUserError {
                code: Some("TAKEN".to_string()),
                field: Some(vec!["input".to_string(), "email".to_string()]),
                message: EMAIL_TAKEN.to_string(),
            }]);
        }
        CustomerCreateResult::Created(Customer {
            id: format!("gid://shopify/Customer/{call}"),
        })
    }
}
