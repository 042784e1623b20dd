/// Client-specific result type
pub type Result<T> = std::result::Result<T, LlmrClientError>;

/// Errors from the LLMR client
#[derive(Debug, thiserror::Error)]
pub enum LlmrClientError {
    /// Transport failure: unreachable host, reset connection, timeout
    #[error("request to {endpoint} failed: {source}")]
    Network {
        /// Endpoint that was attempted
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON
    #[error("failed to decode response from {endpoint}: {message}")]
    Decode {
        /// Endpoint that was attempted
        endpoint: String,
        /// Decoder error message
        message: String,
    },

    /// Server answered with a non-2xx status
    #[error("{endpoint} returned {status} {code}: {message}")]
    UnexpectedStatus {
        /// Endpoint that was attempted
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// WordPress error code, `unknown` when the body carries none
        code: String,
        /// Human-readable error message
        message: String,
    },

    /// Base URL could not be turned into a request URL
    #[error("invalid endpoint URL {endpoint}: {message}")]
    InvalidUrl {
        /// Endpoint that was attempted
        endpoint: String,
        /// Parser error message
        message: String,
    },

    /// Multi-site search named a site that is not configured
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Discriminant of an [`LlmrClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    UnexpectedStatus,
    InvalidUrl,
    UnknownSite,
    Config,
}

impl LlmrClientError {
    /// Failure kind without the payload
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::UnknownSite(_) => ErrorKind::UnknownSite,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Endpoint the failed request was sent to, if a request was attempted
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Network { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::UnexpectedStatus { endpoint, .. }
            | Self::InvalidUrl { endpoint, .. } => Some(endpoint),
            Self::UnknownSite(_) | Self::Config(_) => None,
        }
    }
}
