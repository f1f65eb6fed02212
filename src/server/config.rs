//! Environment-based application configuration.
//!
//! Configuration is read once at startup into a `Config` value. The shared API token is
//! handed to the `AuthGuard` from here, so nothing reads the process environment while
//! serving requests.

use std::{fmt, net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://infobip.db?mode=rwc";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost,http://localhost:3000,http://localhost:8000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub struct Config {
    pub api_token: ApiToken,
    pub database_url: String,
    pub allowed_origins: AllowedOrigins,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - `API_TOKEN` missing/empty or another value invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Only `API_TOKEN` is required. `DATABASE_URL`, `ALLOWED_ORIGINS` and `BIND_ADDR`
    /// fall back to local development defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_token = lookup("API_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("API_TOKEN".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_token: ApiToken::new(api_token)?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            allowed_origins: AllowedOrigins::parse(
                &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            )?,
            bind_addr,
        })
    }
}

/// Shared secret every API request must present as its bearer credential.
///
/// The value never shows up in `Debug` output or logs.
#[derive(Clone)]
pub struct ApiToken(Arc<str>);

impl ApiToken {
    /// Wraps a secret, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "API_TOKEN".to_string(),
                reason: "token must not be empty".to_string(),
            });
        }

        Ok(Self(Arc::from(token)))
    }

    /// Compares `candidate` against the secret.
    ///
    /// Every byte is inspected once the lengths agree, so timing does not reveal the
    /// position of the first mismatch.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.as_bytes();
        let candidate = candidate.as_bytes();

        if expected.len() != candidate.len() {
            return false;
        }

        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// CORS origins allowed to call the API.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    /// A lone `*` entry: any origin.
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parses a comma separated origin list. Blank entries are skipped and any `*`
    /// entry opens the API to every origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origins: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.iter().any(|origin| *origin == "*") {
            return Ok(Self::Any);
        }

        origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGINS".to_string(),
                    reason: format!("'{}': {}", origin, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}
