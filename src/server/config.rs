use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_AVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar/";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Prefix joined with a hash of the author identity to build comment avatars.
    pub avatar_base_url: String,

    /// Single allowed CORS origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let cors_allowed_origin = match std::env::var("CORS_ALLOWED_ORIGIN") {
            Ok(origin) => Some(HeaderValue::from_str(&origin).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            avatar_base_url: std::env::var("AVATAR_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AVATAR_BASE_URL.to_string()),
            cors_allowed_origin,
        })
    }
}
