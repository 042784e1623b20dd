#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod sites;
pub mod telemetry;

use std::time::Duration;

use indexmap::IndexMap;
use serde::Deserialize;
use url::Url;

pub use sites::SiteConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level LLMR client configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host used by single-site commands
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Per-request timeout, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Sites for multi-site search, keyed by id
    #[serde(default)]
    pub sites: IndexMap<String, SiteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            telemetry: TelemetryConfig::default(),
            sites: IndexMap::new(),
        }
    }
}

impl Config {
    /// Request timeout, `None` when disabled
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
