use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use storefront_accounts_api::{ApiResponse, StatusCode as ApiStatusCode};

/// Backend wrapper for storefront-accounts-api's ApiResponse that adds Axum integration.
///
/// This type wraps the WASM-compatible ApiResponse and provides:
/// - Axum's IntoResponse trait implementation
/// - HTTP header support
/// - Status code conversion
pub struct AppResponse {
    inner: ApiResponse,
    headers: Option<HeaderMap>,
}

impl AppResponse {
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse) -> Self {
        Self {
            inner,
            headers: None,
        }
    }

    /// Adds HTTP headers to the response
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        match self.headers.as_mut() {
            Some(existing) => existing.extend(headers),
            None => self.headers = Some(headers),
        }
        self
    }

    /// Marks the response as never cacheable
    pub fn no_store(self) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        self.with_headers(headers)
    }
}

impl From<ApiResponse> for AppResponse {
    fn from(inner: ApiResponse) -> Self {
        Self::new(inner)
    }
}

/// Converts API StatusCode to Axum's StatusCode
fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::Unauthorized => StatusCode::UNAUTHORIZED,
    }
}

/// Implements Axum's IntoResponse trait for our wrapper
impl IntoResponse for AppResponse {
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status());

        let mut response = match self.inner.into_body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        };

        if let Some(headers) = self.headers {
            response.headers_mut().extend(headers);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_has_no_content_type() {
        let response = AppResponse::from(ApiResponse::ok()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_error_response_is_json() {
        let response = AppResponse::from(ApiResponse::bad_request("nope")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_no_store_sets_cache_control() {
        let response = AppResponse::from(ApiResponse::ok()).no_store().into_response();
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
    }

    #[test]
    fn test_response_with_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Custom-Header", "value".parse().unwrap());

        let response = AppResponse::from(ApiResponse::ok())
            .with_headers(headers)
            .no_store()
            .into_response();
        assert_eq!(response.headers().get("X-Custom-Header").unwrap(), "value");
        assert!(response.headers().get(header::CACHE_CONTROL).is_some());
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(convert_status(ApiStatusCode::Ok), StatusCode::OK);
        assert_eq!(
            convert_status(ApiStatusCode::BadRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            convert_status(ApiStatusCode::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
    }
}
