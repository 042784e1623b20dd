#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the LLM Ready WordPress MCP endpoints
//!
//! Wraps the `/wp-json/llmr/mcp/v1` REST routes (search, business info and
//! friends) and returns the decoded JSON bodies as opaque values

mod client;
pub mod error;
pub mod sites;
pub mod types;

pub use client::LlmrClient;
pub use error::{ErrorKind, LlmrClientError, Result};
pub use sites::{Site, SiteDirectory, SiteResults, SiteSelector};
pub use types::*;
