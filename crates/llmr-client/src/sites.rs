//! Search across several WordPress hosts
//!
//! Sites are visited one after another in directory order. A site that fails
//! is logged and skipped so one broken host does not hide the others.

use std::time::Duration;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::client::LlmrClient;
use crate::error::{LlmrClientError, Result};
use crate::types::SearchRequest;

/// A WordPress host running the LLM Ready plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Display name
    pub name: String,
    /// Base URL of the WordPress install
    pub url: String,
    /// Free-form labels used to select groups of sites
    pub tags: Vec<String>,
}

/// Which sites a multi-site search visits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelector {
    /// Every configured site
    All,
    /// A single site by id
    Named(String),
    /// Every site carrying the tag
    Tagged(String),
}

/// Search results from one site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteResults {
    /// Site id
    pub site: String,
    /// Decoded search response
    pub results: Value,
}

/// Ordered set of sites keyed by id
#[derive(Debug, Clone, Default)]
pub struct SiteDirectory {
    sites: IndexMap<String, Site>,
    timeout: Option<Duration>,
}

impl SiteDirectory {
    /// Create a directory from sites keyed by id
    pub fn new(sites: IndexMap<String, Site>) -> Self {
        Self {
            sites,
            timeout: None,
        }
    }

    /// Apply a per-request timeout to every site client
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add or replace a site
    pub fn insert(&mut self, id: impl Into<String>, site: Site) -> Option<Site> {
        self.sites.insert(id.into(), site)
    }

    /// Look up a site by id
    pub fn get(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Iterate over `(id, site)` pairs in directory order
    pub fn sites(&self) -> impl Iterator<Item = (&str, &Site)> {
        self.sites.iter().map(|(id, site)| (id.as_str(), site))
    }

    /// Number of configured sites
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether no sites are configured
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Resolve a selector to `(id, site)` pairs in directory order
    ///
    /// # Errors
    ///
    /// Returns [`LlmrClientError::UnknownSite`] if a named site is not configured
    pub fn select(&self, selector: &SiteSelector) -> Result<Vec<(&str, &Site)>> {
        match selector {
            SiteSelector::All => Ok(self.sites().collect()),
            SiteSelector::Named(id) => self
                .sites
                .get_key_value(id)
                .map(|(id, site)| vec![(id.as_str(), site)])
                .ok_or_else(|| LlmrClientError::UnknownSite(id.clone())),
            SiteSelector::Tagged(tag) => Ok(self
                .sites()
                .filter(|(_, site)| site.tags.iter().any(|t| t == tag))
                .collect()),
        }
    }

    /// Run the same search against every selected site
    ///
    /// Only sites that answered successfully appear in the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector names an unknown site or a site
    /// client cannot be built
    pub async fn search(&self, req: &SearchRequest, selector: &SiteSelector) -> Result<Vec<SiteResults>> {
        let selected = self.select(selector)?;
        let mut results = Vec::with_capacity(selected.len());

        for (id, site) in selected {
            let mut client = LlmrClient::new(&site.url);
            if let Some(timeout) = self.timeout {
                client = client.with_timeout(timeout)?;
            }

            match client.search(req).await {
                Ok(value) => results.push(SiteResults {
                    site: id.to_owned(),
                    results: value,
                }),
                Err(e) => {
                    tracing::warn!(site = %id, error = %e, "site search failed, skipping");
                }
            }
        }

        Ok(results)
    }
}

impl FromIterator<(String, Site)> for SiteDirectory {
    fn from_iter<I: IntoIterator<Item = (String, Site)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
