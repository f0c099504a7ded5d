// src/handlers/account.rs

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;

use crate::accounts::services::RegistrationService;
use crate::response::AppResponse;

/// POST /account/register
/// Création d'un compte client sur la boutique
///
/// Takes the raw body so that malformed JSON reaches the service's own
/// error mapping instead of axum's rejection.
pub async fn register(
    State(service): State<Arc<RegistrationService>>,
    body: Bytes,
) -> AppResponse {
    let response = service.handle(&body).await;
    AppResponse::from(response).no_store()
}
