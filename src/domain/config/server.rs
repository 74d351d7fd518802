use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("CORS_ALLOWED_ORIGINS must not contain empty origins")]
    EmptyCorsOrigin,

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` means any origin is allowed.
    pub cors_allowed_origins: Option<Vec<HeaderValue>>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("CORS_ALLOWED_ORIGINS").ok().as_deref(),
        )
    }

    pub fn from_values(
        port: Option<&str>,
        cors_allowed_origins: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = match cors_allowed_origins {
            Some(raw) => Some(
                raw.split(',')
                    .map(|s| parse_origin(s.trim()))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };

        Ok(Self {
            port,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    if origin.is_empty() {
        return Err(ConfigError::EmptyCorsOrigin);
    }
    origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_allowed_origins: None,
        }
    }
}
