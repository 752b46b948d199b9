//! Startup configuration, collected from the environment once in `main`
//! and passed into the router explicitly.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Cross-origin policy handed to the router at startup
///
/// An empty origin list means any origin is allowed (the development
/// default); production deployments set `ALLOWED_ORIGINS` to the
/// front-end's origin(s).
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Builds the CORS middleware for this policy
    ///
    /// The layer also answers OPTIONS preflight requests with an empty
    /// success response carrying these headers.
    pub fn layer(&self) -> CorsLayer {
        let base = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(Duration::from_secs(86400));

        if self.allowed_origins.is_empty() {
            return base.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        base.allow_origin(AllowOrigin::list(origins))
    }
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub jwt_secret: String,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, warning and falling
    /// back to development defaults for anything unset.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using default");
            "sqlite:adops.db".to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            "dev-secret-key".to_string()
        });

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            database_url,
            jwt_secret,
            cors: CorsConfig { allowed_origins },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_origin_list_is_default() {
        let cors = CorsConfig::default();
        assert!(cors.allowed_origins.is_empty());
        // Builds the permissive layer without panicking
        let _ = cors.layer();
    }

    #[test]
    fn explicit_origins_build_a_layer() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://ads.example.com".to_string()],
        };
        let _ = cors.layer();
    }
}
