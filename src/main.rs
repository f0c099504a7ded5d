use std::env;
use std::sync::Arc;

mod accounts;
mod app;
mod config;
mod error;
mod handlers;
mod response;
mod storefront;

use accounts::services::RegistrationService;
use app::build_router;
use axum::http::HeaderValue;
use config::Config;
use storefront::http::StorefrontClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new(
            "info,storefront_accounts=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // Initialize logging for all environments
    setup_logging();
    tracing::info!("Starting storefront-accounts...");

    let config = Config::from_env()?;

    let client = StorefrontClient::new(
        config.storefront_endpoint()?,
        config.storefront_api_token.clone(),
        config.storefront_timeout,
    )?;
    tracing::info!(endpoint = %client.endpoint(), "Storefront client ready");

    let service = Arc::new(RegistrationService::new(Arc::new(client)));
    let app = build_router(service, HeaderValue::from_str(&config.frontend_url)?);

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        if config.is_production() {
            tracing::info!("Running in local HTTP server mode with production settings");
        } else {
            tracing::info!("Running in local HTTP server mode");
        }
        let addr = config.server_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
