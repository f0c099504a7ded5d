// src/app.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::accounts::services::RegistrationService;
use crate::handlers::account::register;
use crate::handlers::health::health;

/// Configure les routes de compte client
pub fn account_routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/register", post(register))
        .with_state(service)
}

/// The storefront frontend posts the registration form cross-origin.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Construit l'application complète
pub fn build_router(service: Arc<RegistrationService>, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/account", account_routes(service))
        .layer(cors_layer(allowed_origin))
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUIRED_FIELDS_MESSAGE;
    use crate::storefront::fake::{EMAIL_TAKEN, FakeCustomerClient};
    use crate::storefront::{CustomerCreateResult, StorefrontError};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use lambda_http::tower::ServiceExt; // for oneshot
    use storefront_accounts_api::{ErrorResponse, UNKNOWN_ERROR};

    const ORIGIN: &str = "http://localhost:3000";

    fn test_app(client: FakeCustomerClient) -> Router {
        let service = Arc::new(RegistrationService::new(Arc::new(client)));
        build_router(service, HeaderValue::from_static(ORIGIN))
    }

    fn register_request(body: &str) -> Request<Body> {
        Request::builder()
            .uri("/account/register")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_body(resp: Response) -> ErrorResponse {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).expect("error body")
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let app = test_app(FakeCustomerClient::new());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_requires_email_and_password() {
        let app = test_app(FakeCustomerClient::new());

        let resp = app
            .oneshot(register_request(r#"{"email":"","password":"x"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(error_body(resp).await.error, REQUIRED_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_register_success_has_empty_body() {
        let app = test_app(FakeCustomerClient::new());

        let resp = app
            .oneshot(register_request(
                r#"{"email":"a@b.com","password":"secret1","firstName":"Ada"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_register_twice_is_unauthorized() {
        let app = test_app(FakeCustomerClient::new());
        let body = format!(
            r#"{{"email":"dup+{}@b.com","password":"secret1"}}"#,
            uuid::Uuid::new_v4()
        );

        let first = app.clone().oneshot(register_request(&body)).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app.oneshot(register_request(&body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_body(second).await.error, EMAIL_TAKEN);
    }

    #[tokio::test]
    async fn test_register_transport_failure_is_unauthorized() {
        let app = test_app(FakeCustomerClient::responding(
            CustomerCreateResult::TransportFailed(StorefrontError::Status {
                status: 503,
                body: "maintenance".to_string(),
            }),
        ));

        let resp = app
            .oneshot(register_request(r#"{"email":"a@b.com","password":"secret1"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_body(resp).await.error, UNKNOWN_ERROR);
    }

    #[tokio::test]
    async fn test_register_without_content_type_still_validates() {
        let app = test_app(FakeCustomerClient::new());
        let req = Request::builder()
            .uri("/account/register")
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_rejects_get() {
        let app = test_app(FakeCustomerClient::new());
        let req = Request::builder()
            .uri("/account/register")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_storefront_origin() {
        let app = test_app(FakeCustomerClient::new());
        let req = Request::builder()
            .uri("/account/register")
            .method("OPTIONS")
            .header(header::ORIGIN, ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
    }
}
