//! Environment-driven settings and defaults.

use std::time::Duration;

use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://api.jikan.moe/v4";
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_START_PATH: &str = "/";

const ENV_CATALOG_URL: &str = "AURORA_CATALOG_URL";
const ENV_LIMIT: &str = "AURORA_CATALOG_LIMIT";
const ENV_TIMEOUT: &str = "AURORA_FETCH_TIMEOUT_SECS";
const ENV_START_PATH: &str = "AURORA_START_PATH";

/// Runtime settings for the catalog client and the initial route.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog base URL. Validated by `from_env`; parsed again when the
    /// catalog client is built.
    pub catalog_url: String,
    /// Items per catalog grid.
    pub limit: u32,
    pub timeout: Duration,
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            start_path: DEFAULT_START_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment. Invalid values are logged and
    /// replaced by their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_CATALOG_URL) {
            match raw.parse::<Url>() {
                Ok(url) => config.catalog_url = url.into(),
                Err(err) => log::warn!("invalid {ENV_CATALOG_URL} {raw:?}: {err}"),
            }
        }

        if let Ok(raw) = std::env::var(ENV_LIMIT) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.limit = n,
                _ => log::warn!("invalid {ENV_LIMIT} {raw:?}, using {DEFAULT_LIMIT}"),
            }
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => log::warn!("invalid {ENV_TIMEOUT} {raw:?}, using {DEFAULT_TIMEOUT_SECS}"),
            }
        }

        if let Ok(raw) = std::env::var(ENV_START_PATH) {
            if raw.starts_with('/') {
                config.start_path = raw;
            } else {
                log::warn!("invalid {ENV_START_PATH} {raw:?}, paths start with '/'");
            }
        }

        config
    }
}
