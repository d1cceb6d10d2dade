//! Directory configuration.
//!
//! Defaults can be overridden from the environment:
//! - `LANDROUTE_API_URL`: REST Countries base URL (default: "https://restcountries.com/v3.1")
//! - `LANDROUTE_TIMEOUT_SECS`: per-request timeout in seconds (default: 30)

use crate::error::{LandrouteError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_URL_ENV: &str = "LANDROUTE_API_URL";
pub const TIMEOUT_ENV: &str = "LANDROUTE_TIMEOUT_SECS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DirectoryConfig {
    /// Base URL, without trailing slash, e.g. `https://restcountries.com/v3.1`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DirectoryConfig {
    /// Defaults, overridden by whatever the environment sets.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// An unparseable timeout is logged and replaced by the default.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout_secs = match var(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse() {
                Ok(secs) => secs,
                Err(e) => {
                    warn!(
                        value = %raw,
                        error = %e,
                        default = defaults.timeout_secs,
                        "ignoring invalid {}", TIMEOUT_ENV
                    );
                    defaults.timeout_secs
                }
            },
            None => defaults.timeout_secs,
        };
        Self {
            base_url: var(API_URL_ENV).unwrap_or(defaults.base_url),
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| LandrouteError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(LandrouteError::Config(format!(
                "base_url {:?} cannot be a base",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(LandrouteError::Config("timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `{base}/alpha/{code}?fields=cca3&fields=name&fields=borders`
    pub fn country_url(&self, code: &str) -> Result<Url> {
        let mut url = self.endpoint(&["alpha", code])?;
        url.query_pairs_mut()
            .append_pair("fields", "cca3")
            .append_pair("fields", "name")
            .append_pair("fields", "borders");
        Ok(url)
    }

    /// `{base}/all?fields=name&fields=cca3&fields=area`
    pub fn catalog_url(&self) -> Result<Url> {
        let mut url = self.endpoint(&["all"])?;
        url.query_pairs_mut()
            .append_pair("fields", "name")
            .append_pair("fields", "cca3")
            .append_pair("fields", "area");
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LandrouteError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| LandrouteError::Config(format!("base_url {:?} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
