use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::error::{LlmrClientError, Result};
use crate::types::{Endpoint, MCP_NAMESPACE, SearchRequest};

/// Typed client for the LLM Ready MCP endpoints of a single WordPress host
#[derive(Debug, Clone)]
pub struct LlmrClient {
    base_url: String,
    http: reqwest::Client,
}

impl LlmrClient {
    /// Create a new client pointing at the given base URL
    ///
    /// A single trailing slash is stripped. The URL is not validated here;
    /// a malformed URL fails with [`LlmrClientError::InvalidUrl`] once a
    /// request is attempted.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Rebuild the HTTP client with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmrClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: self.base_url,
            http,
        })
    }

    /// Normalized base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full address of an MCP route on this host
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{MCP_NAMESPACE}{}", self.base_url, endpoint.path())
    }

    // -- Search --

    /// Search site content
    ///
    /// POSTs the request as JSON to `/wp-json/llmr/mcp/v1/search` and
    /// returns the decoded response body
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-2xx status or the body is not JSON
    pub async fn search(&self, req: &SearchRequest) -> Result<Value> {
        let endpoint = self.endpoint_url(Endpoint::Search);
        let url = parse_endpoint(&endpoint)?;

        tracing::debug!(
            endpoint = %endpoint,
            query = %req.query,
            per_page = req.per_page,
            post_type = %req.post_type,
            "sending search request"
        );

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(req);

        execute(request, &endpoint).await
    }

    // -- Site information --

    /// Fetch the business profile
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-2xx status or the body is not JSON
    pub async fn get_business_info(&self) -> Result<Value> {
        self.get(Endpoint::Business).await
    }

    /// Fetch the MCP discovery document (capabilities and route map)
    pub async fn get_discovery(&self) -> Result<Value> {
        self.get(Endpoint::Discovery).await
    }

    /// Fetch contact details
    pub async fn get_contact_info(&self) -> Result<Value> {
        self.get(Endpoint::Contact).await
    }

    /// Fetch the services and products listing
    pub async fn get_services(&self) -> Result<Value> {
        self.get(Endpoint::Services).await
    }

    /// Fetch booking availability
    pub async fn get_booking(&self) -> Result<Value> {
        self.get(Endpoint::Booking).await
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Value> {
        let endpoint = self.endpoint_url(endpoint);
        let url = parse_endpoint(&endpoint)?;

        tracing::debug!(endpoint = %endpoint, "sending GET request");

        execute(self.http.get(url), &endpoint).await
    }
}

// -- Helper functions --

/// Strip a single trailing slash from a base URL
fn normalize_base_url(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}

/// Parse a formatted endpoint address into a request URL
fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| LlmrClientError::InvalidUrl {
        endpoint: endpoint.to_owned(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(LlmrClientError::InvalidUrl {
            endpoint: endpoint.to_owned(),
            message: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    Ok(url)
}

/// Send a request, check its status and decode the JSON body
async fn execute(request: reqwest::RequestBuilder, endpoint: &str) -> Result<Value> {
    let network = |source: reqwest::Error| LlmrClientError::Network {
        endpoint: endpoint.to_owned(),
        source,
    };

    let response = request.send().await.map_err(network)?;
    let response = handle_error(response, endpoint).await?;
    let body = response.bytes().await.map_err(network)?;

    serde_json::from_slice(&body).map_err(|e| LlmrClientError::Decode {
        endpoint: endpoint.to_owned(),
        message: e.to_string(),
    })
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response, endpoint: &str) -> Result<reqwest::Response> {
    let status = response.status();
    tracing::debug!(endpoint = %endpoint, status = status.as_u16(), "received response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let (code, message) = parse_error_body(&body);

    Err(LlmrClientError::UnexpectedStatus {
        endpoint: endpoint.to_owned(),
        status: status.as_u16(),
        code,
        message,
    })
}

/// Parse a WordPress REST error body into (code, message)
fn parse_error_body(body: &str) -> (String, String) {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let code = json["code"].as_str().unwrap_or("unknown").to_owned();
        let message = json["message"].as_str().unwrap_or(body).to_owned();
        (code, message)
    } else {
        ("unknown".to_owned(), body.to_owned())
    }
}
