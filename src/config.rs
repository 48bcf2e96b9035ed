//! Table store configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const REQUEST_TIMEOUT_VAR: &str = "STORE_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "STORE_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required value was neither passed explicitly nor set in the environment.
    #[error("missing config: env var {var} not set")]
    MissingVar { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeouts: StoreTimeouts,
}

impl StoreConfig {
    /// Build typed store config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `STORE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STORE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    /// Like [`StoreConfig::from_env`], but explicit values win over the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required value is absent from both.
    pub fn resolve(base_url: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        from_lookup(base_url, api_key, |key| std::env::var(key).ok())
    }
}

fn from_lookup(
    base_url: Option<String>,
    api_key: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<StoreConfig, ConfigError> {
    let base_url = base_url
        .or_else(|| lookup(URL_VAR))
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar { var: URL_VAR })?
        .trim()
        .trim_end_matches('/')
        .to_string();
    let api_key = api_key
        .or_else(|| lookup(API_KEY_VAR))
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar { var: API_KEY_VAR })?;
    let timeouts = StoreTimeouts {
        request_secs: parse_u64(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
        connect_secs: parse_u64(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
    };

    Ok(StoreConfig { base_url, api_key, timeouts })
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
