//! Runtime configuration read from the environment (and `.env`)

use std::time::Duration;

use crate::error::{Result, ScoutError};
use crate::types::CheckConfig;

pub const ENV_SEED: &str = "DOMAIN_SCOUT_SEED";
pub const ENV_VERIFY: &str = "DOMAIN_SCOUT_VERIFY";
pub const ENV_CONCURRENCY: &str = "DOMAIN_SCOUT_CONCURRENCY";
pub const ENV_TIMEOUT_SECS: &str = "DOMAIN_SCOUT_TIMEOUT_SECS";
pub const ENV_RDAP_URL: &str = "DOMAIN_SCOUT_RDAP_URL";
pub const ENV_LOG: &str = "DOMAIN_SCOUT_LOG";

/// Log filter used when neither `RUST_LOG` nor `DOMAIN_SCOUT_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Seed for reproducible suggestions; `None` uses the thread RNG
    pub seed: Option<u64>,
    /// Confirm simulated availability against registries
    pub verify: bool,
    pub check: CheckConfig,
    pub log_filter: String,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verify: false,
            check: CheckConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(seed) = get(ENV_SEED) {
            config.seed = Some(parse_number(ENV_SEED, &seed)?);
        }

        if let Some(verify) = get(ENV_VERIFY) {
            config.verify = parse_bool(ENV_VERIFY, &verify)?;
        }

        if let Some(concurrency) = get(ENV_CONCURRENCY) {
            let concurrency: usize = parse_number(ENV_CONCURRENCY, &concurrency)?;
            if concurrency == 0 {
                return Err(ScoutError::config(format!("{} must be at least 1", ENV_CONCURRENCY)));
            }
            config.check.concurrent_checks = concurrency;
        }

        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = parse_number(ENV_TIMEOUT_SECS, &secs)?;
            if secs == 0 {
                return Err(ScoutError::config(format!("{} must be at least 1", ENV_TIMEOUT_SECS)));
            }
            config.check.timeout = Duration::from_secs(secs);
        }

        if let Some(url) = get(ENV_RDAP_URL) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ScoutError::config(format!("{} must be an http(s) URL, got '{}'", ENV_RDAP_URL, url)));
            }
            config.check.rdap_base_url = Some(url);
        }

        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ScoutError::config(format!("{} must be a non-negative integer, got '{}'", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ScoutError::config(format!("{} must be true or false, got '{}'", key, value))),
    }
}
