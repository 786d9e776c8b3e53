//! Server configuration parsed from environment variables.
//!
//! The upstream base URL and access token are required for the console to do
//! anything useful, but their absence only degrades it: startup continues,
//! a warning is logged, and every upstream call fails as a request error.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_VAR: &str = "MAPPING_API_BASE_URL";
pub const CODE_VAR: &str = "MAPPING_API_CODE";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the upstream mapping API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingApiConfig {
    /// Base URL without a trailing slash. Empty when unset.
    pub base_url: String,
    /// Shared access token appended as the `code` query parameter. Empty when unset.
    pub code: String,
    pub timeouts: Timeouts,
}

impl MappingApiConfig {
    /// Names of required variables that were missing or blank.
    #[must_use]
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base_url.is_empty() {
            missing.push(BASE_URL_VAR);
        }
        if self.code.is_empty() {
            missing.push(CODE_VAR);
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub mapping_api: MappingApiConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required (warned, not enforced):
    /// - `MAPPING_API_BASE_URL`
    /// - `MAPPING_API_CODE`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MAPPING_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MAPPING_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is present but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup(BASE_URL_VAR)
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/')
            .to_string();
        let code = lookup(CODE_VAR).unwrap_or_default().trim().to_string();
        let timeouts = Timeouts {
            request_secs: parse_u64(&lookup, "MAPPING_API_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(&lookup, "MAPPING_API_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, mapping_api: MappingApiConfig { base_url, code, timeouts } })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
