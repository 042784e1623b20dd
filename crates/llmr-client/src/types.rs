use serde::{Deserialize, Serialize};

/// Default page size for content search
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Default post type filter for content search
pub const DEFAULT_POST_TYPE: &str = "any";

// -- Search request types --

/// Content search request body
///
/// Serialized as `{"query": ..., "per_page": ..., "post_type": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search query
    pub query: String,
    /// Maximum number of results to return
    pub per_page: u32,
    /// WordPress post type to search, `any` for all types
    pub post_type: String,
}

impl SearchRequest {
    /// Create a search request with the default page size and post type
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: DEFAULT_PER_PAGE,
            post_type: DEFAULT_POST_TYPE.to_owned(),
        }
    }

    /// Override the page size
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Override the post type filter
    #[must_use]
    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }
}

// -- Endpoints --

/// REST namespace all MCP routes live under
pub const MCP_NAMESPACE: &str = "/wp-json/llmr/mcp/v1";

/// MCP routes exposed by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Business,
    Discovery,
    Contact,
    Services,
    Booking,
}

impl Endpoint {
    /// Route path relative to [`MCP_NAMESPACE`]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Search => "/search",
            Self::Business => "/business",
            Self::Discovery => "/discovery",
            Self::Contact => "/contact",
            Self::Services => "/services",
            Self::Booking => "/booking",
        }
    }
}
