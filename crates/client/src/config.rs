//! Client configuration.

use std::time::Duration;

use crate::error::{ApiError, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default base URL of the EcoFi REST API.
pub const DEFAULT_API_URL: &str =
    "https://ecofi-fheaf6arh9acd6ck.germanywestcentral-01.azurewebsites.net/api";

/// Path of the token refresh endpoint, relative to the base URL.
pub const DEFAULT_REFRESH_PATH: &str = "/User/RefreshToken";

/// Route the app navigates to after a forced logout.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

pub const API_URL_ENV: &str = "ECOFI_API_URL";
pub const API_TIMEOUT_ENV: &str = "ECOFI_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub refresh_path: String,
    pub login_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ClientConfig {
    /// Reads `ECOFI_API_URL` and `ECOFI_API_TIMEOUT_SECS`, keeping defaults for
    /// unset or empty values.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_value)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::Config(format!("{} must be a whole number of seconds, got '{}'", API_TIMEOUT_ENV, raw))
            })?;
            if secs == 0 {
                return Err(ApiError::Config(format!("{} must be greater than zero", API_TIMEOUT_ENV)));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Joins the base URL and an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
