use anyhow::{Context, Result};
use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::storefront::http::storefront_endpoint;

const DEFAULT_API_VERSION: &str = "2022-07";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Détecte automatiquement l'environnement
    pub fn detect() -> Self {
        Self::from_vars(
            env::var("AWS_LAMBDA_FUNCTION_NAME").ok().as_deref(),
            env::var("APP_ENV").ok().as_deref(),
        )
    }

    fn from_vars(lambda_function: Option<&str>, app_env: Option<&str>) -> Self {
        // Méthode 1: Vérifier si on est dans AWS Lambda
        if lambda_function.is_some() {
            return Self::Production;
        }

        // Méthode 2: Vérifier la variable APP_ENV
        match app_env {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub storefront_domain: String,
    pub storefront_api_token: String,
    pub storefront_api_version: String,
    pub storefront_timeout: Duration,
    pub frontend_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    /// avec détection automatique de l'environnement
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let storefront_domain = Self::get_storefront_domain(&environment)?;
        let storefront_api_token = Self::get_storefront_token(&environment)?;
        let storefront_api_version = env::var("STOREFRONT_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let storefront_timeout = Duration::from_secs(
            env::var("STOREFRONT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        let frontend_url = Self::get_frontend_url(&environment)?;
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        let config = Self {
            environment,
            storefront_domain,
            storefront_api_token,
            storefront_api_version,
            storefront_timeout,
            frontend_url,
            server_host,
            server_port,
        };

        // Fail at startup rather than on the first registration
        let endpoint = config.storefront_endpoint()?;

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Storefront: {}", endpoint);
        tracing::debug!(
            "   Token: {}",
            Self::mask_token(&config.storefront_api_token)
        );
        tracing::debug!("   Frontend: {}", config.frontend_url);
        tracing::debug!("   Server: {}", config.server_addr());

        Ok(config)
    }

    /// Récupère STOREFRONT_DOMAIN, obligatoire en production
    fn get_storefront_domain(environment: &Environment) -> Result<String> {
        match env::var("STOREFRONT_DOMAIN") {
            Ok(domain) => Ok(domain),
            Err(_) if environment.is_production() => {
                anyhow::bail!("STOREFRONT_DOMAIN must be set in production!")
            }
            Err(_) => {
                tracing::warn!("⚠️  STOREFRONT_DOMAIN not set, using the preview shop");
                Ok("hydrogen-preview.myshopify.com".to_string())
            }
        }
    }

    /// Récupère STOREFRONT_API_TOKEN avec validation
    fn get_storefront_token(environment: &Environment) -> Result<String> {
        match env::var("STOREFRONT_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ if environment.is_production() => {
                tracing::error!("❌ STOREFRONT_API_TOKEN not set in production!");
                anyhow::bail!("STOREFRONT_API_TOKEN is required in production")
            }
            _ => {
                tracing::warn!("⚠️  STOREFRONT_API_TOKEN not set, storefront calls will be refused");
                Ok("dev-storefront-token".to_string())
            }
        }
    }

    /// Récupère FRONTEND_URL (origine CORS autorisée)
    fn get_frontend_url(environment: &Environment) -> Result<String> {
        match env::var("FRONTEND_URL") {
            Ok(url) => Ok(url),
            Err(_) if environment.is_production() => {
                anyhow::bail!("FRONTEND_URL must be set in production!")
            }
            Err(_) => Ok("http://localhost:3000".to_string()),
        }
    }

    /// Masque le token dans les logs
    fn mask_token(token: &str) -> String {
        let visible: String = token.chars().take(4).collect();
        if token.chars().count() <= 8 {
            return "***".to_string();
        }
        format!("{visible}***")
    }

    /// GraphQL endpoint of the configured shop
    pub fn storefront_endpoint(&self) -> Result<Url> {
        storefront_endpoint(&self.storefront_domain, &self.storefront_api_version).with_context(
            || {
                format!(
                    "invalid storefront endpoint for domain '{}' and version '{}'",
                    self.storefront_domain, self.storefront_api_version
                )
            },
        )
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Retourne true si on est en mode production
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
