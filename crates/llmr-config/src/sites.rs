use serde::Deserialize;
use url::Url;

/// A WordPress site reachable for multi-site search
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Display name
    pub name: String,
    /// Base URL of the WordPress install
    pub url: Url,
    /// Labels for `--tag` selection
    #[serde(default)]
    pub tags: Vec<String>,
}
